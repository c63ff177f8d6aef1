//! Interactive dish finder over a restaurant guide.
//!
//! ```text
//! cargo run --example dish_finder -- [guide.md] [finder.json]
//! ```
//!
//! Without a guide path the bundled sample guide is used. Set `RUST_LOG=debug`
//! to watch the parser and the tier cascade.

use dishfinder::prelude::*;
use dishfinder::render;
use std::io::{self, BufRead, Write};
use tracing_subscriber::EnvFilter;

const SAMPLE_GUIDE: &str = include_str!("../tests/fixtures/restaurants.md");

fn main() -> Result<(), Box<dyn std::error::Error>> {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
    .with_writer(io::stderr)
    .init();

  let mut args = std::env::args().skip(1);
  let guide = args.next();
  let config = match args.next() {
    Some(path) => FinderConfig::load(path)?,
    None => FinderConfig::default(),
  };

  println!("=== Dish Finder ===\n");

  let catalog = match &guide {
    Some(path) => {
      println!("Loading from: {path}");
      Catalog::load(path, &config.parser)?
    }
    None => {
      println!("Using the bundled sample guide");
      Catalog::from_document(SAMPLE_GUIDE, &config.parser)?
    }
  };
  println!(
    "Loaded {} restaurants, {} dishes\n",
    catalog.restaurants().len(),
    catalog.len()
  );

  #[cfg(feature = "semantic")]
  let index = FlatVectorIndex::build(NgramEmbedder::default(), &catalog)?;

  let builder = DishFinder::builder(catalog).options(config.search);
  #[cfg(feature = "semantic")]
  let builder = builder.embeddings(index);
  let finder = builder.build();

  println!("Type a dish name to search (e.g. 'pho', 'curry', 'sushi'),");
  println!("'list' to see all dishes, or 'quit' to exit.");

  let stdin = io::stdin();
  loop {
    print!("\n> ");
    io::stdout().flush()?;

    let mut line = String::new();
    if stdin.lock().read_line(&mut line)? == 0 {
      break;
    }

    match line.trim() {
      "" => continue,
      "quit" | "exit" | "q" => break,
      "list" => print!("{}", render::catalog_text(finder.catalog())),
      query => println!("{}", render::results_text(query, &finder.find(query))),
    }
  }

  println!("Goodbye!");
  Ok(())
}
