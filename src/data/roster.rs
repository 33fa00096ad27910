//! The record store: a fixed, process-lifetime collection of person records.

use super::Person;

/// An insertion-ordered, immutable collection of person records.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    people: Vec<Person>,
}

impl Roster {
    /// Wrap an existing sequence of records.
    pub fn new(people: Vec<Person>) -> Self {
        Self { people }
    }

    /// Build the built-in sample dataset.
    pub fn sample() -> Self {
        fn person(
            name: &str,
            age: u32,
            email: &str,
            phone: &str,
            address: &str,
            city: &str,
            country: &str,
            postal_code: &str,
            occupation: &str,
            company: &str,
            salary: f64,
        ) -> Person {
            Person {
                name: name.to_string(),
                age,
                email: email.to_string(),
                phone: phone.to_string(),
                address: address.to_string(),
                city: city.to_string(),
                country: country.to_string(),
                postal_code: postal_code.to_string(),
                occupation: occupation.to_string(),
                company: company.to_string(),
                salary,
            }
        }

        Self::new(vec![
            person("Alice Johnson", 30, "alice.johnson@example.com", "123-456-7890", "123 Maple St", "Springfield", "USA", "12345", "Engineer", "TechCorp", 85000.0),
            person("Bob Smith", 45, "bob.smith@example.com", "234-567-8901", "456 Oak St", "Shelbyville", "USA", "67890", "Teacher", "High School", 55000.0),
            person("Charlie Brown", 28, "charlie.brown@example.com", "345-678-9012", "789 Pine St", "Capital City", "USA", "11223", "Designer", "Creative Inc", 62000.0),
            person("Diana Prince", 35, "diana.prince@example.com", "456-789-0123", "321 Elm St", "Metropolis", "USA", "44556", "Doctor", "City Hospital", 120000.0),
            person("Ethan Hunt", 40, "ethan.hunt@example.com", "567-890-1234", "654 Cedar St", "Gotham", "USA", "77889", "Agent", "IMF", 95000.0),
            person("Fiona Gallagher", 29, "fiona.gallagher@example.com", "678-901-2345", "987 Birch St", "Riverdale", "USA", "33445", "Chef", "Gourmet Kitchen", 48000.0),
            person("George Bailey", 50, "george.bailey@example.com", "789-012-3456", "159 Spruce St", "Bedford Falls", "USA", "55667", "Banker", "Savings & Loan", 75000.0),
            person("Hannah Montana", 22, "hannah.montana@example.com", "890-123-4567", "753 Willow St", "Nashville", "USA", "66778", "Singer", "Music Studio", 100000.0),
            person("Ian Malcolm", 47, "ian.malcolm@example.com", "901-234-5678", "357 Redwood St", "Jurassic Park", "USA", "77889", "Mathematician", "Chaos Theory Lab", 110000.0),
            person("Jane Doe", 33, "jane.doe@example.com", "012-345-6789", "951 Aspen St", "Smallville", "USA", "88990", "Journalist", "Daily Planet", 68000.0),
        ])
    }

    /// All records, in insertion order.
    pub fn people(&self) -> &[Person] {
        &self.people
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.people.len()
    }

    /// Whether the roster holds no records.
    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }
}
