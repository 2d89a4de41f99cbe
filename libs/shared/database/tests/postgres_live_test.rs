// Runs against a real Postgres. Enable with LIVE_INTEGRATION_TESTS=true and DATABASE_URL.

use chrono::NaiveDate;

use shared_config::AppConfig;
use shared_database::{AppointmentStore, Database, PgStore, ProfessionalStore, UserStore};
use shared_models::clinic::{AppointmentChanges, NewAppointment, NewProfessional, NewUser};

fn should_run_live_tests() -> bool {
    std::env::var("LIVE_INTEGRATION_TESTS").unwrap_or_default() == "true"
}

async fn connect() -> PgStore {
    let config = AppConfig::from_env();
    let database = Database::connect(&config).await.expect("database reachable");
    database.migrate().await.expect("migrations apply");
    PgStore::new(database.pool().clone())
}

#[tokio::test]
async fn test_live_user_round_trip() {
    if !should_run_live_tests() {
        println!("Skipping live database tests (set LIVE_INTEGRATION_TESTS=true to enable)");
        return;
    }

    let store = connect().await;
    let id = store
        .insert_user(&NewUser {
            name: "Usuario Tester".to_string(),
            email: Some("tester@example.com".to_string()),
            phone: None,
        })
        .await
        .unwrap();

    assert!(store.user_exists(id).await.unwrap());
    assert_eq!(store.delete_user(id).await.unwrap(), 1);
    assert!(!store.user_exists(id).await.unwrap());
    assert_eq!(store.delete_user(id).await.unwrap(), 0);
}

#[tokio::test]
async fn test_live_appointment_full_replace() {
    if !should_run_live_tests() {
        return;
    }

    let store = connect().await;
    let professional_id = store
        .insert_professional(&NewProfessional {
            name: "Dra. Live".to_string(),
            email: None,
            phone: None,
            specialty: "cardiology".to_string(),
        })
        .await
        .unwrap();

    let scheduled_at = NaiveDate::from_ymd_opt(2025, 6, 1)
        .unwrap()
        .and_hms_opt(10, 0, 0)
        .unwrap();
    let id = store
        .insert_appointment(&NewAppointment {
            scheduled_at,
            service: "cardiology".to_string(),
            notes: Some("Jane Doe".to_string()),
            status: "scheduled".to_string(),
            user_id: None,
            professional_id: Some(professional_id),
        })
        .await
        .unwrap();

    let changes = AppointmentChanges {
        scheduled_at,
        service: "cardiology".to_string(),
        status: "confirmed".to_string(),
        user_id: None,
        professional_id: None,
    };
    assert_eq!(store.update_appointment(id, &changes).await.unwrap(), 1);

    let row = store
        .list_appointments()
        .await
        .unwrap()
        .into_iter()
        .find(|a| a.id == id)
        .expect("row present");
    assert_eq!(row.status, "confirmed");
    assert_eq!(row.professional_id, None);
    assert_eq!(row.notes.as_deref(), Some("Jane Doe"));

    assert_eq!(store.delete_appointment(id).await.unwrap(), 1);
    assert_eq!(store.update_appointment(id, &changes).await.unwrap(), 0);
    store.delete_professional(professional_id).await.unwrap();
}
