use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Hospital {
    pub id: u32,
    pub name: &'static str,
    pub address: &'static str,
    pub distance_km: f32,
    pub rating: f32,
    pub phone: &'static str,
    pub hours: &'static str,
    pub emergency: bool,
}

impl Hospital {
    pub fn full_stars(&self) -> usize {
        (self.rating.floor().max(0.0) as usize).min(5)
    }
}

pub const DIRECTORY: &[Hospital] = &[
    Hospital {
        id: 1,
        name: "Mumbai General Hospital",
        address: "123 Healthcare St, Mumbai",
        distance_km: 1.2,
        rating: 4.5,
        phone: "+91 9876543210",
        hours: "Open 24/7",
        emergency: true,
    },
    Hospital {
        id: 2,
        name: "Apex Medical Center",
        address: "456 Wellness Ave, Mumbai",
        distance_km: 2.5,
        rating: 4.2,
        phone: "+91 9876543211",
        hours: "Open 24/7",
        emergency: true,
    },
    Hospital {
        id: 3,
        name: "Thane Community Hospital",
        address: "789 Health Blvd, Thane",
        distance_km: 4.7,
        rating: 3.9,
        phone: "+91 9876543212",
        hours: "8:00 AM - 10:00 PM",
        emergency: false,
    },
    Hospital {
        id: 4,
        name: "Sunshine Medical Clinic",
        address: "101 Care Lane, Mumbai",
        distance_km: 3.1,
        rating: 4.1,
        phone: "+91 9876543213",
        hours: "9:00 AM - 9:00 PM",
        emergency: false,
    },
    Hospital {
        id: 5,
        name: "City Emergency Center",
        address: "202 Urgent St, Mumbai",
        distance_km: 1.8,
        rating: 4.7,
        phone: "+91 9876543214",
        hours: "Open 24/7",
        emergency: true,
    },
];

/// Case-insensitive substring search over name and address, in directory order.
pub fn search(term: &str) -> Vec<&'static Hospital> {
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return DIRECTORY.iter().collect();
    }
    DIRECTORY
        .iter()
        .filter(|hospital| {
            hospital.name.to_lowercase().contains(&needle)
                || hospital.address.to_lowercase().contains(&needle)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_stars() {
        assert_eq!(DIRECTORY[0].full_stars(), 4);
        assert_eq!(DIRECTORY[2].full_stars(), 3);
    }

    #[test]
    fn test_blank_term_returns_everything() {
        assert_eq!(search("   ").len(), DIRECTORY.len());
    }
}
