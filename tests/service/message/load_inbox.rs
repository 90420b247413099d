use chrono::{Duration, Utc};

use super::*;

/// Expect a received message in the inbox with sender and listing attached
#[tokio::test]
async fn contains_received_message() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tables().build().await?;
    let alice = test.user().insert_user("alice").await?;
    let bob = test.user().insert_user("bob").await?;
    let dogs = test.category().insert_category("Dogs").await?;
    let rex = test.animal().insert_animal(alice.id, dogs.id, "Rex").await?;
    let message_service = MessageService::new(&test.db);
    let sent = message_service
        .send_message(new_message(bob.id, alice.id, Some(rex.id), "Hi"))
        .await
        .unwrap();

    let inbox = message_service.load_inbox(alice.id).await.unwrap();
    let bob_inbox = message_service.load_inbox(bob.id).await.unwrap();

    assert_eq!(inbox.len(), 1);
    assert_eq!(inbox[0].message.id, sent.id);
    assert!(!inbox[0].message.is_read);
    assert_eq!(inbox[0].sender.username, "bob");
    assert_eq!(inbox[0].animal.as_ref().map(|a| a.id), Some(rex.id));
    assert!(bob_inbox.is_empty());

    Ok(())
}

/// Expect newest messages first in both mailboxes
#[tokio::test]
async fn orders_newest_first() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tables().build().await?;
    let alice = test.user().insert_user("alice").await?;
    let bob = test.user().insert_user("bob").await?;
    let now = Utc::now().naive_utc();
    test.message()
        .insert_message_created_at(bob.id, alice.id, None, "First", now - Duration::hours(2))
        .await?;
    test.message()
        .insert_message_created_at(bob.id, alice.id, None, "Second", now)
        .await?;
    let message_service = MessageService::new(&test.db);

    let inbox = message_service.load_inbox(alice.id).await.unwrap();
    let sent = message_service.load_sent(bob.id).await.unwrap();

    let inbox_subjects: Vec<&str> = inbox.iter().map(|m| m.message.subject.as_str()).collect();
    let sent_subjects: Vec<&str> = sent.iter().map(|m| m.message.subject.as_str()).collect();
    assert_eq!(inbox_subjects, vec!["Second", "First"]);
    assert_eq!(sent_subjects, vec!["Second", "First"]);

    Ok(())
}
