//! Demo records
//!
//! Ids are stable so tests can address rows directly.

use chrono::{DateTime, Duration, TimeZone, Utc};

use shared::models::{
    Admin, BookedProduct, BookedService, BookingParty, Customer, CustomerStatus, Employee,
    EmployeeStatus, ProductBooking, ProductSummary, ServiceBooking, ServiceSummary,
};

use crate::state::MockData;

fn day(n: i64) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0)
        .single()
        .unwrap_or_default()
        + Duration::days(n)
}

fn customer(
    id: &str,
    first: &str,
    last: &str,
    phone: &str,
    status: CustomerStatus,
    n: i64,
) -> Customer {
    Customer {
        id: id.to_string(),
        first_name: Some(first.to_string()),
        last_name: Some(last.to_string()),
        name: None,
        email: Some(format!("{}.{}@example.com", first, last).to_lowercase()),
        phone: Some(phone.to_string()),
        status,
        created_at: Some(day(n)),
    }
}

fn employee(id: &str, first: &str, last: &str, role: &str, status: EmployeeStatus, n: i64) -> Employee {
    Employee {
        id: id.to_string(),
        first_name: first.to_string(),
        last_name: last.to_string(),
        email: format!("{}@firebliss.test", first.to_lowercase()),
        role: role.to_string(),
        password: None,
        status,
        created_at: Some(day(n)),
    }
}

fn party(name: &str) -> Option<BookingParty> {
    Some(BookingParty {
        name: Some(name.to_string()),
        email: Some(format!("{}@example.com", name.to_lowercase().replace(' ', "."))),
    })
}

pub fn demo_data() -> MockData {
    use CustomerStatus as C;
    use EmployeeStatus as E;

    MockData {
        customers: vec![
            customer("c-1001", "Amara", "Okafor", "0712345678", C::Pending, 0),
            customer("c-1002", "Liam", "Walsh", "0723456789", C::Active, 1),
            customer("c-1003", "Sofia", "Rossi", "0734567890", C::Suspended, 2),
            customer("c-1004", "Kenji", "Sato", "0745678901", C::Rejected, 3),
            customer("c-1005", "Nadia", "Haddad", "0756789012", C::Pending, 4),
        ],
        employees: vec![
            employee("e-2001", "Grace", "Mwangi", "manager", E::Active, 0),
            employee("e-2002", "Tomas", "Novak", "technician", E::Active, 1),
            employee("e-2003", "Priya", "Nair", "receptionist", E::Suspended, 2),
        ],
        admins: vec![Admin {
            id: "a-1".to_string(),
            full_name: "Site Admin".to_string(),
            email: "admin@firebliss.test".to_string(),
            phone_number: Some("0700000000".to_string()),
            created_at: Some(day(-30)),
        }],
        credentials: vec![("admin@firebliss.test".to_string(), "admin123".to_string())],
        products: vec![
            ProductSummary { name: "Fire Extinguisher 6kg".into(), price: 4500.0 },
            ProductSummary { name: "Smoke Detector".into(), price: 1800.0 },
            ProductSummary { name: "Fire Blanket".into(), price: 1200.0 },
            ProductSummary { name: "Hose Reel".into(), price: 15000.0 },
            ProductSummary { name: "Exit Sign".into(), price: 900.0 },
        ],
        services: vec![
            ServiceSummary { name: "Extinguisher Refill".into(), price: 1500.0 },
            ServiceSummary { name: "Safety Inspection".into(), price: 5000.0 },
            ServiceSummary { name: "Staff Fire Training".into(), price: 12000.0 },
            ServiceSummary { name: "Alarm Installation".into(), price: 20000.0 },
        ],
        product_bookings: vec![
            ProductBooking {
                id: "pb-1".into(),
                customer: party("Liam Walsh"),
                product: Some(BookedProduct {
                    commodity_name: Some("Fire Extinguisher 6kg".into()),
                    price: Some(4500.0),
                }),
                quantity: 2,
                status: "delivered".into(),
                payment_amount: Some(9000.0),
                payment_status: Some("paid".into()),
                payment_method: Some("mpesa".into()),
                transaction_code: Some("QW12ER34".into()),
                booked_at: Some(day(5)),
            },
            ProductBooking {
                id: "pb-2".into(),
                customer: party("Sofia Rossi"),
                product: Some(BookedProduct {
                    commodity_name: Some("Smoke Detector".into()),
                    price: Some(1800.0),
                }),
                quantity: 1,
                status: "pending".into(),
                payment_amount: Some(1800.0),
                payment_status: Some("unpaid".into()),
                payment_method: Some("cash".into()),
                transaction_code: None,
                booked_at: Some(day(6)),
            },
        ],
        service_bookings: vec![
            ServiceBooking {
                id: "sb-1".into(),
                customer: party("Liam Walsh"),
                service: Some(BookedService {
                    name: Some("Safety Inspection".into()),
                    price: Some(5000.0),
                }),
                booking_date: Some(day(7)),
                status: "confirmed".into(),
                payment_method: Some("card".into()),
                notes: Some("Warehouse, two floors".into()),
            },
            ServiceBooking {
                id: "sb-2".into(),
                customer: party("Amara Okafor"),
                service: Some(BookedService {
                    name: Some("Extinguisher Refill".into()),
                    price: Some(1500.0),
                }),
                booking_date: Some(day(8)),
                status: "cancelled".into(),
                payment_method: None,
                notes: None,
            },
        ],
    }
}
