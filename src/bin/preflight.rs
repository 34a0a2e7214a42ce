use lecture_api::{AuthorStore, BookStore, Settings};
use std::collections::HashSet;
use std::sync::Arc;

fn usage_and_exit() -> ! {
    eprintln!(
        "Usage: cargo run --bin preflight -- [--init-if-missing]\n\
         \n\
         Reads env vars (or .env):\n\
           DATABASE_PATH, BIND_ADDR, SERIALIZE_WRITES, QUERY_DEPTH_LIMIT\n"
    );
    std::process::exit(2);
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.iter().any(|a| a == "-h" || a == "--help") {
        usage_and_exit();
    }
    let init_if_missing = args.iter().any(|a| a == "--init-if-missing");

    let settings = Settings::from_env()?;

    println!("> Preflight:");
    println!("  DATABASE_PATH={}", settings.database_path.display());
    println!("  BIND_ADDR={}", settings.bind_addr);
    println!("  SERIALIZE_WRITES={}", settings.serialize_writes);
    println!("  QUERY_DEPTH_LIMIT={}", settings.query_depth_limit);
    if !settings.serialize_writes {
        eprintln!("  Warning: writes are not serialized; concurrent creates may lose records.");
    }

    if !settings.database_path.is_dir() {
        if !init_if_missing {
            return Err(anyhow::anyhow!(
                "DATABASE_PATH {} does not exist. Re-run with --init-if-missing",
                settings.database_path.display()
            ));
        }
        std::fs::create_dir_all(&settings.database_path)?;
        println!("  Created {}", settings.database_path.display());
    }

    for path in [settings.authors_path(), settings.books_path()] {
        if path.exists() {
            continue;
        }
        if init_if_missing {
            std::fs::write(&path, "[]")?;
            println!("  Initialized {}", path.display());
        } else {
            println!("  {} missing (reads as empty collection)", path.display());
        }
    }

    let authors = Arc::new(AuthorStore::new(&settings));
    let books = BookStore::new(&settings, Arc::clone(&authors));

    let author_list = authors.list().await?;
    let book_list = books.list().await?;
    println!("  Authors: {}", author_list.len());
    println!("  Books: {}", book_list.len());

    let author_ids: HashSet<_> = author_list.iter().map(|a| a.id).collect();
    let dangling: Vec<_> = book_list
        .iter()
        .filter(|b| !author_ids.contains(&b.author_id))
        .collect();
    if !dangling.is_empty() {
        println!("  Books referencing deleted authors: {}", dangling.len());
        for book in dangling {
            println!("    Book(id={}) -> Author(id={})", book.id, book.author_id);
        }
    }

    println!("> Preflight OK.");
    Ok(())
}
