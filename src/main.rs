//! Shelfspace CLI
//!
//! Small demo surface for the shelf engine.
//!
//! Usage:
//!     shelfspace demo
//!     shelfspace fill --rows 2 --columns 2 --orders 3 --count 5
//!     shelfspace fill --at 1,2,3 --json

use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use shelfspace::{render_table, Bounds, ConsoleListener, Item, Position, Shelf};

/// Shelfspace - bounded 3-D slot store
#[derive(Parser)]
#[command(name = "shelfspace")]
#[command(version)]
#[command(about = "Place tagged items on a bounded shelf and watch the events", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scripted walkthrough: first-fit adds, displacement, deletion
    Demo,

    /// Fill a shelf in scan order and render it
    Fill {
        /// Shelf tag
        #[arg(long, default_value = "rack-a")]
        tag: String,

        /// Rows on the shelf
        #[arg(long, default_value_t = 5)]
        rows: u32,

        /// Columns per row
        #[arg(long, default_value_t = 3)]
        columns: u32,

        /// Slots per cell
        #[arg(long, default_value_t = 10)]
        orders: u32,

        /// Number of items to place
        #[arg(short, long, default_value_t = 12)]
        count: usize,

        /// Also place one item at an explicit slot, e.g. 1,2,3
        #[arg(long)]
        at: Option<Position>,

        /// Emit the snapshot as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

fn cmd_demo() {
    let mut shelf = Shelf::new("aisle-7");
    shelf.add_listener(Arc::new(ConsoleListener));

    println!("-- first-fit adds --");
    let x1 = match shelf.add_item(Item::new("x1")) {
        Ok(id) => id,
        Err(_) => return,
    };
    let _ = shelf.add_item(Item::new("x2"));

    println!();
    println!("-- explicit placement at the occupied slot (1,1,1) --");
    let _ = shelf.add_item_at(Item::new("x3"), Position::new(1, 1, 1));

    println!();
    println!("-- deletion --");
    shelf.delete_item(x1);

    println!();
    println!("{}", render_table(&shelf.snapshot()));
    println!("{shelf}");
}

fn cmd_fill(tag: &str, bounds: Bounds, count: usize, at: Option<Position>, json: bool) {
    let mut shelf = Shelf::with_bounds(tag, bounds);

    for n in 1..=count {
        if shelf.add_item(Item::new(format!("item-{n}"))).is_err() {
            eprintln!("shelf full after {} item(s)", shelf.size());
            break;
        }
    }
    if let Some(position) = at {
        if shelf.add_item_at(Item::new("extra"), position).is_err() {
            eprintln!("could not place extra item at {position}");
        }
    }

    if json {
        match serde_json::to_string_pretty(&shelf.snapshot()) {
            Ok(out) => println!("{out}"),
            Err(err) => eprintln!("snapshot serialization failed: {err}"),
        }
    } else {
        print!("{}", render_table(&shelf.snapshot()));
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Demo => cmd_demo(),
        Commands::Fill {
            tag,
            rows,
            columns,
            orders,
            count,
            at,
            json,
        } => cmd_fill(
            &tag,
            Bounds::new(rows, columns, orders),
            count,
            at,
            json,
        ),
    }
}
