//! Integration tests for musician, ensemble, track, and user storage.

use recordshop_core::roles::ROLE_USER;
use recordshop_db::models::ensemble::CreateEnsemble;
use recordshop_db::models::musician::CreateMusician;
use recordshop_db::models::track::NewTrack;
use recordshop_db::models::user::{CreateUser, UpdateProfile};
use recordshop_db::repositories::{EnsembleRepo, MusicianRepo, TrackRepo, UserRepo};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn track(name: &str, duration: i32) -> NewTrack {
    NewTrack {
        name: name.to_string(),
        duration,
    }
}

fn new_ensemble(name: &str) -> CreateEnsemble {
    CreateEnsemble {
        name: name.to_string(),
        ensemble_type: None,
        tracks: vec![],
    }
}

fn new_user(username: &str, email: &str) -> CreateUser {
    CreateUser {
        first_name: "Ada".to_string(),
        last_name: "Lovelace".to_string(),
        username: username.to_string(),
        email: email.to_string(),
        password_hash: "hash".to_string(),
        city: Some("London".to_string()),
        role: ROLE_USER.to_string(),
    }
}

fn violated_constraint(err: &sqlx::Error) -> Option<String> {
    err.as_database_error()
        .and_then(|e| e.constraint())
        .map(str::to_string)
}

// ---------------------------------------------------------------------------
// Test: ownership
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_owned_tracks_reference_exactly_one_owner(pool: PgPool) {
    let ensemble = EnsembleRepo::create_with_tracks(
        &pool,
        &CreateEnsemble {
            tracks: vec![track("Group Piece", 300)],
            ..new_ensemble("Sextet")
        },
    )
    .await
    .unwrap();
    let musician = MusicianRepo::create_with_tracks(
        &pool,
        &CreateMusician {
            first_name: "Bill".to_string(),
            last_name: "Evans".to_string(),
            role: Some("pianist".to_string()),
            ensemble_id: Some(ensemble.ensemble.id),
            tracks: vec![track("Peace Piece", 400)],
        },
    )
    .await
    .unwrap();

    let group = &ensemble.tracks[0];
    assert_eq!(group.ensemble_id, Some(ensemble.ensemble.id));
    assert!(group.musician_id.is_none());

    let solo = &musician.tracks[0];
    assert_eq!(solo.musician_id, Some(musician.musician.id));
    assert!(solo.ensemble_id.is_none());

    let listed = TrackRepo::list_with_owner(&pool).await.unwrap();
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0].ensemble_name.as_deref(), Some("Sextet"));
    assert_eq!(listed[1].musician_first_name.as_deref(), Some("Bill"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_track_with_two_owners_rejected(pool: PgPool) {
    let ensemble = EnsembleRepo::create_with_tracks(&pool, &new_ensemble("Owners"))
        .await
        .unwrap();
    let musician = MusicianRepo::create_with_tracks(
        &pool,
        &CreateMusician {
            first_name: "X".to_string(),
            last_name: "Y".to_string(),
            role: None,
            ensemble_id: None,
            tracks: vec![],
        },
    )
    .await
    .unwrap();

    let result = sqlx::query(
        "INSERT INTO tracks (name, duration, musician_id, ensemble_id) VALUES ('Both', 10, $1, $2)",
    )
    .bind(musician.musician.id)
    .bind(ensemble.ensemble.id)
    .execute(&pool)
    .await;

    let err = result.unwrap_err();
    assert_eq!(
        violated_constraint(&err).as_deref(),
        Some("ck_tracks_single_owner")
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_failed_track_insert_rolls_back_owner(pool: PgPool) {
    let result = EnsembleRepo::create_with_tracks(
        &pool,
        &CreateEnsemble {
            tracks: vec![track("Fine", 10), track("Broken", 0)],
            ..new_ensemble("Rollback")
        },
    )
    .await;
    assert!(result.is_err());

    assert!(EnsembleRepo::list(&pool).await.unwrap().is_empty());
    assert!(TrackRepo::list_with_owner(&pool).await.unwrap().is_empty());
}

// ---------------------------------------------------------------------------
// Test: ensembles and musicians
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_duplicate_ensemble_name_conflicts(pool: PgPool) {
    EnsembleRepo::create_with_tracks(&pool, &new_ensemble("Twins"))
        .await
        .unwrap();
    let err = EnsembleRepo::create_with_tracks(&pool, &new_ensemble("Twins"))
        .await
        .unwrap_err();
    assert_eq!(
        violated_constraint(&err).as_deref(),
        Some("uq_ensembles_name")
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_deleting_ensemble_keeps_members(pool: PgPool) {
    let ensemble = EnsembleRepo::create_with_tracks(
        &pool,
        &CreateEnsemble {
            tracks: vec![track("Theirs", 100)],
            ..new_ensemble("Short Lived")
        },
    )
    .await
    .unwrap();
    let member = MusicianRepo::create_with_tracks(
        &pool,
        &CreateMusician {
            first_name: "Ron".to_string(),
            last_name: "Carter".to_string(),
            role: Some("bassist".to_string()),
            ensemble_id: Some(ensemble.ensemble.id),
            tracks: vec![],
        },
    )
    .await
    .unwrap();

    let listed = MusicianRepo::list(&pool).await.unwrap();
    assert_eq!(listed[0].ensemble_name.as_deref(), Some("Short Lived"));

    assert!(EnsembleRepo::delete(&pool, ensemble.ensemble.id).await.unwrap());
    assert!(!EnsembleRepo::exists(&pool, ensemble.ensemble.id).await.unwrap());

    let survivor = MusicianRepo::find_by_id(&pool, member.musician.id)
        .await
        .unwrap()
        .expect("musician survives ensemble delete");
    assert!(survivor.ensemble_id.is_none());
    assert!(TrackRepo::find_by_id(&pool, ensemble.tracks[0].id)
        .await
        .unwrap()
        .is_none());
}

// ---------------------------------------------------------------------------
// Test: users
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_user_create_lookup_and_profile_update(pool: PgPool) {
    let user = UserRepo::create(&pool, &new_user("ada", "ada@example.com"))
        .await
        .unwrap();
    assert_eq!(user.role, ROLE_USER);

    let found = UserRepo::find_by_username(&pool, "ada")
        .await
        .unwrap()
        .expect("user should exist");
    assert_eq!(found.id, user.id);

    assert!(UserRepo::exists_by_username_or_email(&pool, "ada", "other@example.com")
        .await
        .unwrap());
    assert!(UserRepo::exists_by_username_or_email(&pool, "other", "ada@example.com")
        .await
        .unwrap());
    assert!(!UserRepo::exists_by_username_or_email(&pool, "other", "other@example.com")
        .await
        .unwrap());

    let updated = UserRepo::update_profile(
        &pool,
        user.id,
        &UpdateProfile {
            first_name: " Augusta ".to_string(),
            last_name: "King".to_string(),
            city: None,
        },
    )
    .await
    .unwrap()
    .unwrap();
    assert_eq!(updated.first_name, "Augusta");
    assert_eq!(updated.last_name, "King");
    assert!(updated.city.is_none());
    assert_eq!(updated.username, "ada");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_duplicate_username_conflicts(pool: PgPool) {
    UserRepo::create(&pool, &new_user("dup", "one@example.com"))
        .await
        .unwrap();
    let err = UserRepo::create(&pool, &new_user("dup", "two@example.com"))
        .await
        .unwrap_err();
    assert_eq!(
        violated_constraint(&err).as_deref(),
        Some("uq_users_username")
    );
}
