//! Seed data loaded into the store at startup.

use crate::domain::{Contact, ContactId};
use uuid::Uuid;

const SAMPLES: [(u128, &str, &str, &str, &str); 16] = [
    (0x5e3c0a52_7b1e_4c7a_9f0d_3a2b1c4d5e01, "Joe", "Bloggs", "+44(0)751123456", "joebloggs@example.com"),
    (0x5e3c0a52_7b1e_4c7a_9f0d_3a2b1c4d5e02, "Jane", "Doe", "+1 555 0100", "jane.doe@example.com"),
    (0x5e3c0a52_7b1e_4c7a_9f0d_3a2b1c4d5e03, "Mario", "Rossi", "+39 06 1234567", "mario.rossi@example.com"),
    (0x5e3c0a52_7b1e_4c7a_9f0d_3a2b1c4d5e04, "Erika", "Mustermann", "+49 30 901820", "erika@example.com"),
    (0x5e3c0a52_7b1e_4c7a_9f0d_3a2b1c4d5e05, "Juan", "Perez", "+34 91 123 4567", "juan.perez@example.com"),
    (0x5e3c0a52_7b1e_4c7a_9f0d_3a2b1c4d5e06, "Jean", "Dupont", "+33 1 23 45 67 89", "jean.dupont@example.com"),
    (0x5e3c0a52_7b1e_4c7a_9f0d_3a2b1c4d5e07, "Fred", "Nerk", "+61 2 9876 5432", "fred.nerk@example.com"),
    (0x5e3c0a52_7b1e_4c7a_9f0d_3a2b1c4d5e08, "Jan", "Kowalski", "+48 22 123 45 67", "jan.kowalski@example.com"),
    (0x5e3c0a52_7b1e_4c7a_9f0d_3a2b1c4d5e09, "Ivan", "Ivanov", "+7 495 123 4567", "ivan.ivanov@example.com"),
    (0x5e3c0a52_7b1e_4c7a_9f0d_3a2b1c4d5e0a, "Jan", "Jansen", "+31 20 123 4567", "jan.jansen@example.com"),
    (0x5e3c0a52_7b1e_4c7a_9f0d_3a2b1c4d5e0b, "Sven", "Svensson", "+46 8 123 456 78", "sven@example.com"),
    (0x5e3c0a52_7b1e_4c7a_9f0d_3a2b1c4d5e0c, "Ola", "Nordmann", "+47 22 12 34 56", "ola.nordmann@example.com"),
    (0x5e3c0a52_7b1e_4c7a_9f0d_3a2b1c4d5e0d, "Matti", "Meikalainen", "+358 9 123 4567", "matti@example.com"),
    (0x5e3c0a52_7b1e_4c7a_9f0d_3a2b1c4d5e0e, "Jos", "Bleau", "+1 514 555 0199", "jos.bleau@example.com"),
    (0x5e3c0a52_7b1e_4c7a_9f0d_3a2b1c4d5e0f, "Taro", "Yamada", "+81 3 1234 5678", "taro.yamada@example.com"),
    (0x5e3c0a52_7b1e_4c7a_9f0d_3a2b1c4d5e10, "Ana", "Silva", "+55 11 91234 5678", "ana.silva@example.com"),
];

/// The startup contacts, in display order. Ids are fixed so links stay stable
/// across restarts.
pub fn sample_contacts() -> Vec<Contact> {
    SAMPLES
        .iter()
        .map(|&(id, first_name, last_name, phone, email)| Contact {
            id: ContactId::from(Uuid::from_u128(id)),
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            phone: phone.to_string(),
            email: email.to_string(),
        })
        .collect()
}
