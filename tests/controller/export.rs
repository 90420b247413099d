use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
};
use petpal::server::controller::export::export_animals_xml;
use petpal_test_utils::prelude::*;

use crate::{body_text, TestContextExt};

/// Expect an XML document with escaped text fields
#[tokio::test]
async fn renders_listings_as_xml() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tables().build().await?;
    let alice = test.user().insert_user("alice").await?;
    let dogs = test.category().insert_category("Dogs & Puppies").await?;
    test.animal().insert_animal(alice.id, dogs.id, "Rex <3").await?;

    let result = export_animals_xml(State(test.into_app_state())).await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers()[header::CONTENT_TYPE],
        "application/xml; charset=UTF-8"
    );
    let body = body_text(resp).await;
    assert!(body.contains("<name>Rex &lt;3</name>"));
    assert!(body.contains("<category>Dogs &amp; Puppies</category>"));
    assert!(body.contains("<owner>alice</owner>"));

    Ok(())
}

/// Expect an empty collection when there are no listings
#[tokio::test]
async fn renders_empty_collection() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tables().build().await?;

    let result = export_animals_xml(State(test.into_app_state())).await;

    let body = body_text(result.unwrap().into_response()).await;
    assert!(body.starts_with("<?xml"));
    assert!(!body.contains("<animal>"));

    Ok(())
}
