#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    mergington_activities::run().await
}
