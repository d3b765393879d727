//! Simple SDK Example
//!
//! Walks through the same steps as the problem screens: list, create, open,
//! annotate, rename and delete.
//!
//! # Usage
//!
//! ```bash
//! PROBLEMDESK_API_URL=http://127.0.0.1:3001 cargo run --example simple
//! ```

use problemdesk_core::application::{CreateProblemRequest, ProblemService};
use problemdesk_core::domain::ProblemUpdate;
use problemdesk_core::port::time_provider::SystemTimeProvider;
use problemdesk_sdk::ProblemDeskClient;
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let api_url = std::env::var("PROBLEMDESK_API_URL")
        .unwrap_or_else(|_| "http://127.0.0.1:3001".to_string());

    println!("ProblemDesk SDK - Simple Example");
    println!("================================\n");

    let client = Arc::new(ProblemDeskClient::connect(&api_url)?);
    let service = ProblemService::new(client, Arc::new(SystemTimeProvider));

    // 1. List
    println!("1. Fetching problems from {}...", api_url);
    let problems = service.list().await?;
    for problem in problems.iter().take(5) {
        let marker = if problem.is_new { "New" } else { "" };
        println!("   {:<12} {:<4} {}", problem.number, marker, problem.short_description);
    }
    println!("   ✓ {} problems\n", problems.len());

    // 2. Create
    println!("2. Creating a problem...");
    let created = service
        .create(CreateProblemRequest {
            short_description: "SDK example problem".to_string(),
            description: "Created by examples/simple.rs".to_string(),
        })
        .await?;
    println!("   ✓ Problem {} created ({})\n", created.number, created.sys_id);

    // 3. Work note
    println!("3. Adding a work note...");
    let detail = service
        .add_work_note(&created.sys_id, "First note from the SDK example")
        .await?;
    println!("   ✓ {} work notes\n", detail.work_notes.len());

    // 4. Update
    println!("4. Updating short description...");
    service
        .update(
            &created.sys_id,
            ProblemUpdate::short_description("SDK example problem (edited)"),
        )
        .await?;
    println!("   ✓ Updated\n");

    // 5. Delete
    println!("5. Deleting...");
    service.delete(&created.sys_id).await?;
    println!("   ✓ Deleted");

    println!("\n✓ Example completed successfully!");

    Ok(())
}
