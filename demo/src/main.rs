use anyhow::Result;
use crud_domain::Entity;
use demo::{Customer, CustomerId, CustomerService, CustomerStore};
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    init_tracing();

    let service = CustomerService::new(CustomerStore::new());

    let ada = service
        .register(Customer::new("Ada Lovelace", "ADA@example.com"))
        .await?;
    let grace = service
        .register(Customer::new("Grace Hopper", "grace@example.com"))
        .await?;
    println!("registered: {:?}", service.list().await?);

    let mut changes = ada.clone();
    changes.email = "ada@analytical.engine".into();
    let ada = service.amend(ada.id(), changes).await?;
    println!("amended: {ada:?}");

    if let Err(err) = service.register(Customer::new("", "nobody@example.com")).await {
        println!("rejected: {err}");
    }

    service.remove(grace.id()).await?;
    match service.find(grace.id()).await {
        Ok(found) => println!("unexpected: {found:?}"),
        Err(err) => println!("after remove: {err}"),
    }

    if let Err(err) = service.find(&CustomerId::default()).await {
        println!("empty id: {err}");
    }

    println!("remaining: {:?}", service.list().await?);
    Ok(())
}
