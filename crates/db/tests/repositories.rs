//! Integration tests for the repository layer against a real database.
//!
//! Exercises:
//! - User creation and the unique email constraint
//! - Idempotent room provisioning
//! - Message ordering and sender resolution
//! - Blueprint persistence round-trip and counting

use sqlx::PgPool;
use webform_core::blueprint::{BlueprintDocument, MainGoal, ReferenceSite};
use webform_core::roles::{ROLE_ADMIN, ROLE_CLIENT};
use webform_db::models::user::CreateUser;
use webform_db::repositories::blueprint_repo::BlueprintRepo;
use webform_db::repositories::message_repo::MessageRepo;
use webform_db::repositories::room_repo::RoomRepo;
use webform_db::repositories::user_repo::UserRepo;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn client_input(email: &str) -> CreateUser {
    CreateUser {
        email: email.to_string(),
        password_hash: "$argon2id$fake$hash".to_string(),
        name: "Test Client".to_string(),
        business_name: Some("Acme Studio".to_string()),
        role: ROLE_CLIENT.to_string(),
    }
}

fn submitted_document() -> BlueprintDocument {
    let mut doc = BlueprintDocument::default();
    doc.identity.business_name = "Acme Studio".to_string();
    doc.identity.what_you_sell = "Brand identity packages".to_string();
    doc.vision.main_goal = MainGoal::Portfolio;
    doc.look.references.push(ReferenceSite {
        url: "https://stripe.com".to_string(),
        notes: Some("Clean layout".to_string()),
    });
    doc.content.cta_destination = "hello@acme.test".to_string();
    doc.confirmations.terms_accepted = true;
    doc
}

// ---------------------------------------------------------------------------
// Users
// ---------------------------------------------------------------------------

/// Create a user and read it back by id and by email.
#[sqlx::test(migrations = "./migrations")]
async fn user_create_and_lookup(pool: PgPool) {
    let user = UserRepo::create(&pool, &client_input("lookup@test.com"))
        .await
        .unwrap();
    assert_eq!(user.role, ROLE_CLIENT);
    assert!(!user.is_admin());

    let by_id = UserRepo::find_by_id(&pool, user.id).await.unwrap().unwrap();
    assert_eq!(by_id.email, "lookup@test.com");

    let by_email = UserRepo::find_by_email(&pool, "lookup@test.com")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(by_email.id, user.id);

    assert!(UserRepo::find_by_email(&pool, "other@test.com")
        .await
        .unwrap()
        .is_none());
}

/// The email column is unique; a second insert violates uq_users_email.
#[sqlx::test(migrations = "./migrations")]
async fn duplicate_email_violates_constraint(pool: PgPool) {
    UserRepo::create(&pool, &client_input("dupe@test.com"))
        .await
        .unwrap();

    let err = UserRepo::create(&pool, &client_input("dupe@test.com"))
        .await
        .expect_err("duplicate email must fail");

    match err {
        sqlx::Error::Database(db_err) => {
            assert_eq!(db_err.code().as_deref(), Some("23505"));
            assert_eq!(db_err.constraint(), Some("uq_users_email"));
        }
        other => panic!("expected a database error, got {other:?}"),
    }
}

// ---------------------------------------------------------------------------
// Rooms
// ---------------------------------------------------------------------------

/// ensure_for_user creates exactly one room no matter how often it runs.
#[sqlx::test(migrations = "./migrations")]
async fn ensure_for_user_is_idempotent(pool: PgPool) {
    let user = UserRepo::create(&pool, &client_input("rooms@test.com"))
        .await
        .unwrap();

    let first = RoomRepo::ensure_for_user(&pool, user.id).await.unwrap();
    let second = RoomRepo::ensure_for_user(&pool, user.id).await.unwrap();
    assert_eq!(first.id, second.id);

    let found = RoomRepo::find_by_user(&pool, user.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(found.id, first.id);
}

/// list_with_owner joins owner details for the admin picker.
#[sqlx::test(migrations = "./migrations")]
async fn list_with_owner_includes_owner_details(pool: PgPool) {
    let user = UserRepo::create(&pool, &client_input("owner@test.com"))
        .await
        .unwrap();
    RoomRepo::ensure_for_user(&pool, user.id).await.unwrap();

    let rooms = RoomRepo::list_with_owner(&pool).await.unwrap();
    assert_eq!(rooms.len(), 1);
    assert_eq!(rooms[0].user_id, user.id);
    assert_eq!(rooms[0].owner_email, "owner@test.com");
    assert_eq!(rooms[0].owner_business_name.as_deref(), Some("Acme Studio"));
}

// ---------------------------------------------------------------------------
// Messages
// ---------------------------------------------------------------------------

/// History returns messages oldest first with sender emails resolved.
#[sqlx::test(migrations = "./migrations")]
async fn message_history_is_ordered_with_senders(pool: PgPool) {
    let client = UserRepo::create(&pool, &client_input("talk@test.com"))
        .await
        .unwrap();
    let mut admin_input = client_input("studio@test.com");
    admin_input.role = ROLE_ADMIN.to_string();
    let admin = UserRepo::create(&pool, &admin_input).await.unwrap();

    let room = RoomRepo::ensure_for_user(&pool, client.id).await.unwrap();

    MessageRepo::create(&pool, room.id, client.id, "Hi, any update?")
        .await
        .unwrap();
    MessageRepo::create(&pool, room.id, admin.id, "Draft is ready.")
        .await
        .unwrap();
    MessageRepo::create(&pool, room.id, client.id, "Great, thanks!")
        .await
        .unwrap();

    let history = MessageRepo::list_by_room(&pool, room.id).await.unwrap();
    assert_eq!(history.len(), 3);
    assert_eq!(history[0].content, "Hi, any update?");
    assert_eq!(history[0].sender_email, "talk@test.com");
    assert_eq!(history[1].sender_email, "studio@test.com");
    assert_eq!(history[2].content, "Great, thanks!");
}

// ---------------------------------------------------------------------------
// Blueprints
// ---------------------------------------------------------------------------

/// A stored submission round-trips its normalized columns and full document.
#[sqlx::test(migrations = "./migrations")]
async fn blueprint_round_trip(pool: PgPool) {
    let doc = submitted_document();
    let id = BlueprintRepo::create(&pool, &doc).await.unwrap();

    let row = BlueprintRepo::find_by_id(&pool, id).await.unwrap().unwrap();
    assert_eq!(row.business_name, "Acme Studio");
    assert_eq!(row.main_goal, "Portfolio");
    assert_eq!(row.domain_status, "have");
    assert!(row.terms_accepted);
    assert_eq!(row.pages.len(), 5);
    assert_eq!(row.reference_sites[0]["url"], "https://stripe.com");

    // full_data carries the document verbatim.
    let restored: BlueprintDocument = serde_json::from_value(row.full_data).unwrap();
    assert_eq!(restored.identity.business_name, doc.identity.business_name);
    assert_eq!(restored.look.references, doc.look.references);

    assert!(BlueprintRepo::find_by_id(&pool, id + 1).await.unwrap().is_none());
}

/// count() tracks inserts.
#[sqlx::test(migrations = "./migrations")]
async fn blueprint_count_tracks_inserts(pool: PgPool) {
    assert_eq!(BlueprintRepo::count(&pool).await.unwrap(), 0);
    BlueprintRepo::create(&pool, &submitted_document())
        .await
        .unwrap();
    BlueprintRepo::create(&pool, &submitted_document())
        .await
        .unwrap();
    assert_eq!(BlueprintRepo::count(&pool).await.unwrap(), 2);
}
