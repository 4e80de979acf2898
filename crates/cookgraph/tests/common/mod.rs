//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

/// Header of the nodes table used by the fixtures.
pub const NODES_HEADER: &str = "nodeId,name,labels,description,category,conceptType,difficulty,prepTime,cookTime,stepNumber,methods,tools,synonyms,filePath";

/// Header of the relationships table used by the fixtures.
pub const RELATIONSHIPS_HEADER: &str =
    "relationshipId,relationshipType,startNodeId,endNodeId,amount,unit,step_order";

/// A small but complete dataset: one recipe with two ingredients, two
/// ordered steps, a category and a difficulty level.
pub const SAMPLE_NODES: &[&str] = &[
    r#"R001,番茄炒蛋,Recipe,经典家常菜,家常菜,,2,10分钟,5分钟,,"炒","炒锅,铲子",西红柿炒鸡蛋,dishes/vegetable_dish/番茄炒蛋.md"#,
    "I001,番茄,Ingredient,,蔬菜,,,,,,,,西红柿,",
    "I002,鸡蛋,Ingredient,,蛋类,,,,,,,,,",
    "S001,打蛋,CookingStep,将鸡蛋打散,,,,,,1,,,,",
    "S002,翻炒,CookingStep,下锅翻炒,,,,,,2,炒,炒锅,,",
    "C001,家常菜,RecipeCategory,,,,,,,,,,,",
    "D002,二星,DifficultyLevel,,,,2,,,,,,,",
];

/// Relationships over [`SAMPLE_NODES`].
pub const SAMPLE_RELATIONSHIPS: &[&str] = &[
    "REL001,REQUIRES,R001,I001,2,个,",
    "REL002,REQUIRES,R001,I002,3,个,",
    "REL003,CONTAINS_STEP,R001,S001,,,1",
    "REL004,CONTAINS_STEP,R001,S002,,,2",
    "REL005,NEXT_STEP,S001,S002,,,1",
    "REL006,BELONGS_TO_CATEGORY,R001,C001,,,",
    "REL007,DIFFICULTY_LEVEL,R001,D002,,,",
];

/// Render a table from a header and data rows.
pub fn table(header: &str, rows: &[&str]) -> String {
    let mut data = String::from(header);
    for row in rows {
        data.push('\n');
        data.push_str(row);
    }
    data.push('\n');
    data
}

/// Write `nodes.csv` and `relationships.csv` into `dir`.
pub fn write_dataset(dir: &Path, nodes: &[&str], relationships: &[&str]) {
    std::fs::write(dir.join("nodes.csv"), table(NODES_HEADER, nodes))
        .expect("Failed to write nodes.csv");
    std::fs::write(
        dir.join("relationships.csv"),
        table(RELATIONSHIPS_HEADER, relationships),
    )
    .expect("Failed to write relationships.csv");
}

/// A temporary directory holding the sample dataset.
pub fn sample_dir() -> TempDir {
    let dir = TempDir::new().expect("Failed to create temp directory");
    write_dataset(dir.path(), SAMPLE_NODES, SAMPLE_RELATIONSHIPS);
    dir
}

/// Run the cookgraph binary against `data_dir`.
pub fn run_cookgraph(data_dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_cookgraph"))
        .arg("--data-dir")
        .arg(data_dir)
        .args(args)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute cookgraph binary")
}
