//! The person record type.

/// Column labels, in field declaration order.
pub const COLUMNS: [&str; 11] = [
    "Name",
    "Age",
    "Email",
    "Phone",
    "Address",
    "City",
    "Country",
    "Postal Code",
    "Occupation",
    "Company",
    "Salary",
];

/// Columns holding numeric values (right-aligned in table output).
pub const NUMERIC_COLUMNS: [bool; 11] = [
    false, true, false, false, false, false, false, false, false, false, true,
];

/// A single person record.
///
/// Plain immutable data; records are built once at startup and never
/// mutated. No uniqueness is enforced across records.
#[derive(Debug, Clone, PartialEq)]
pub struct Person {
    /// Full name.
    pub name: String,
    /// Age in years.
    pub age: u32,
    /// Email address.
    pub email: String,
    /// Phone number.
    pub phone: String,
    /// Street address.
    pub address: String,
    /// City of residence.
    pub city: String,
    /// Country of residence.
    pub country: String,
    /// Postal code.
    pub postal_code: String,
    /// Occupation.
    pub occupation: String,
    /// Employer.
    pub company: String,
    /// Annual salary in dollars.
    pub salary: f64,
}

impl Person {
    /// Render the record as display cells, one per column.
    ///
    /// Age is a plain integer, salary keeps one decimal place, everything
    /// else is the field verbatim.
    pub fn row(&self) -> [String; 11] {
        [
            self.name.clone(),
            self.age.to_string(),
            self.email.clone(),
            self.phone.clone(),
            self.address.clone(),
            self.city.clone(),
            self.country.clone(),
            self.postal_code.clone(),
            self.occupation.clone(),
            self.company.clone(),
            format!("{:.1}", self.salary),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn person() -> Person {
        Person {
            name: "Alice Johnson".to_string(),
            age: 30,
            email: "alice.johnson@example.com".to_string(),
            phone: "123-456-7890".to_string(),
            address: "123 Maple St".to_string(),
            city: "Springfield".to_string(),
            country: "USA".to_string(),
            postal_code: "12345".to_string(),
            occupation: "Engineer".to_string(),
            company: "TechCorp".to_string(),
            salary: 85000.0,
        }
    }

    #[test]
    fn row_matches_column_order() {
        let row = person().row();
        assert_eq!(row.len(), COLUMNS.len());
        assert_eq!(row[0], "Alice Johnson");
        assert_eq!(row[1], "30");
        assert_eq!(row[2], "alice.johnson@example.com");
        assert_eq!(row[7], "12345");
        assert_eq!(row[10], "85000.0");
    }

    #[test]
    fn row_round_trips_numeric_fields() {
        let p = person();
        let row = p.row();
        assert_eq!(row[1].parse::<u32>().unwrap(), p.age);
        assert_eq!(row[10].parse::<f64>().unwrap(), p.salary);
    }
}
