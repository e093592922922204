//! List command handler

use anyhow::Result;

use e33_mappings::Category;

pub fn handle() -> Result<()> {
    println!("{:<16} {:<26} accessor", "category", "artifact");
    for category in Category::ALL {
        let artifact = category.artifact_name();
        println!("{:<16} {:<26} get{}", category.to_string(), artifact, artifact);
    }
    Ok(())
}
