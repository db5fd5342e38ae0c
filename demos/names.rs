//! Adds a few names to a filter and checks them back, along with one that
//! was never added.
use slotbloom::{FilterBuilder, Result};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let names = ["patrick", "cody", "vandy", "alex", "jess", "coding", "coder", "code"];
    let mut filter = FilterBuilder::default().build()?;

    filter.add_all(names);

    for name in names {
        if filter.contains(name) {
            println!("The filter probably contains {}", name);
        } else {
            println!("ERROR: {} was added but is reported absent", name);
        }
    }

    let excluded = "loner";
    if filter.contains(excluded) {
        println!("False positive for {}", excluded);
    } else {
        println!("{} is definitely not in the filter", excluded);
    }
    println!(
        "~{} keys, estimated false positive rate {:.4}",
        filter.count(),
        filter.estimated_false_positive_rate()
    );

    Ok(())
}
