use anyhow::{Context, Result, ensure};
use clap::Parser;
use reqwest::{Client, StatusCode};
use serde_json::{Value, json};

/// Walks an article through create, read, like and delete on a running server.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    #[arg(long, default_value = "http://localhost:5000")]
    base_url: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let client = Client::new();
    let articles = format!("{}/api/articles", args.base_url.trim_end_matches('/'));

    let payload = json!({
        "title": "T",
        "excerpt": "E",
        "content": "C",
        "category": "car-news",
        "imageUrl": "http://x/img.jpg"
    });
    let response = client.post(&articles).json(&payload).send().await?;
    ensure!(
        response.status() == StatusCode::CREATED,
        "create returned {}",
        response.status()
    );
    let created: Value = response.json().await?;
    let id = created["id"].as_str().context("created article has no id")?;
    ensure!(created["likes"] == 0 && created["views"] == 0, "counters not zeroed");
    ensure!(created["status"] == "published", "status not defaulted");
    println!("Created {id}");

    let article_url = format!("{articles}/{id}");
    let read: Value = client.get(&article_url).send().await?.json().await?;
    ensure!(read["views"] == 1, "read counted {} views", read["views"]);
    println!("Read counted one view");

    let mut likes = Value::Null;
    for _ in 0..2 {
        likes = client
            .post(format!("{article_url}/like"))
            .send()
            .await?
            .json()
            .await?;
    }
    ensure!(likes == json!({ "likes": 2 }), "unexpected like response {likes}");
    println!("Liked twice");

    let deleted = client.delete(&article_url).send().await?;
    ensure!(deleted.status() == StatusCode::OK, "delete returned {}", deleted.status());

    let gone = client.get(&article_url).send().await?;
    ensure!(
        gone.status() == StatusCode::NOT_FOUND,
        "deleted article still served with {}",
        gone.status()
    );
    println!("Deleted {id}");

    println!("All checks passed");

    Ok(())
}
