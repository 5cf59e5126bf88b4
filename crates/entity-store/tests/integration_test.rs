use entity_store::{StoreActor, StoreError, StoredEntity};
use std::collections::HashSet;

// --- Test Entity ---

#[derive(Clone, Debug, PartialEq)]
struct Ticket {
    id: Option<String>,
    seat: u32,
}

impl StoredEntity for Ticket {
    type Id = String;

    fn id(&self) -> Option<&String> {
        self.id.as_ref()
    }

    fn assign_id(&mut self, id: String) {
        self.id = Some(id);
    }
}

fn ticket(seat: u32) -> Ticket {
    Ticket { id: None, seat }
}

#[tokio::test]
async fn test_store_lifecycle() {
    let counter = std::sync::atomic::AtomicU64::new(1);
    let (actor, client) = StoreActor::<Ticket>::new(10, move || {
        format!(
            "ticket_{}",
            counter.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
        )
    });
    let handle = tokio::spawn(actor.run());

    // Save
    let saved = client.save(ticket(12)).await.unwrap();
    assert_eq!(saved.id.as_deref(), Some("ticket_1"));

    // Exists / Find
    assert!(client.exists_by_id("ticket_1".to_string()).await.unwrap());
    let found = client
        .find_by_id("ticket_1".to_string())
        .await
        .unwrap()
        .expect("ticket should be stored");
    assert_eq!(found.seat, 12);

    // Replace
    let mut moved = found.clone();
    moved.seat = 14;
    client.save(moved).await.unwrap();
    let found = client.find_by_id("ticket_1".to_string()).await.unwrap();
    assert_eq!(found.map(|t| t.seat), Some(14));
    assert_eq!(client.count().await.unwrap(), 1);

    // Delete, twice
    client.delete_by_id("ticket_1".to_string()).await.unwrap();
    let second = client.delete_by_id("ticket_1".to_string()).await;
    assert_eq!(second, Err(StoreError::NotFound("ticket_1".to_string())));
    assert!(!client.exists_by_id("ticket_1".to_string()).await.unwrap());

    drop(client);
    handle.await.unwrap();
}

#[tokio::test]
async fn test_concurrent_saves_get_distinct_ids() {
    let counter = std::sync::atomic::AtomicU64::new(1);
    let (actor, client) = StoreActor::<Ticket>::new(4, move || {
        format!(
            "ticket_{}",
            counter.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
        )
    });
    tokio::spawn(actor.run());

    let mut handles = vec![];
    for seat in 0..20 {
        let client = client.clone();
        handles.push(tokio::spawn(async move { client.save(ticket(seat)).await }));
    }

    let mut ids = HashSet::new();
    for handle in handles {
        let saved = handle.await.unwrap().unwrap();
        ids.insert(saved.id.unwrap());
    }

    assert_eq!(ids.len(), 20);
    assert_eq!(client.count().await.unwrap(), 20);
}

#[tokio::test]
async fn test_client_reports_closed_store() {
    let (actor, client) = StoreActor::<Ticket>::new(1, || "unused".to_string());
    drop(actor);

    let result = client.count().await;

    assert_eq!(result, Err(StoreError::ActorClosed));
}
