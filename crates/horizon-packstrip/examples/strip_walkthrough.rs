//! Walks through a filter-pack strip session on the console.
//!
//! A console host prints every command the strip issues and completes batch
//! updates immediately, the way a host without animations would.
//!
//! Run with: cargo run -p horizon-packstrip --example strip_walkthrough
//!
//! Set `RUST_LOG=horizon_packstrip=debug` to see the strip's own logging.

use horizon_packstrip::prelude::*;
use tracing_subscriber::EnvFilter;

#[derive(Default)]
struct ConsoleHost {
    finished: Vec<BatchId>,
}

impl ViewHost for ConsoleHost {
    fn invalidate_layout_metrics(&mut self) {
        println!("  host: invalidate layout metrics");
    }

    fn perform_batch_update(&mut self, update: &BatchUpdate) {
        println!(
            "  host: {} delete {} item(s), insert {} item(s)",
            update.id(),
            update.deleted().len(),
            update.inserted().len()
        );
        self.finished.push(update.id());
    }

    fn scroll_to_section_header(&mut self, section: usize, animated: bool) {
        println!("  host: scroll header {section} to leading edge (animated: {animated})");
    }

    fn scroll_to_item(&mut self, index: IndexPath, alignment: ScrollAlignment, animated: bool) {
        println!("  host: scroll item {index} into view ({alignment:?}, animated: {animated})");
    }

    fn reload_items(&mut self, items: &[IndexPath]) {
        let items: Vec<String> = items.iter().map(ToString::to_string).collect();
        println!("  host: reload {}", items.join(", "));
    }

    fn reload_data(&mut self) {
        println!("  host: reload everything");
    }
}

/// Reports every finished batch back to the strip.
fn settle(strip: &mut ExpandableStrip<PackCatalog, ConsoleHost>) {
    let finished = std::mem::take(&mut strip.host_mut().finished);
    for id in finished {
        strip.on_batch_update_finished(id);
    }
}

fn demo_catalog() -> PackCatalog {
    let pack = |guid: &str, title: &str, items: &[&str]| {
        items.iter().fold(
            Pack::new(guid, title).with_thumbnail(format!("thumbs/{guid}.png")),
            |pack, item| pack.with_item(PackItem::new(*item)),
        )
    };
    PackCatalog::new(vec![
        pack("mono", "Mono", &["Noir"]),
        pack("warm", "Warm", &["Amber", "Ember", "Honey"]),
        pack("film", "Film", &["Kodak", "Fuji", "Ilford", "Polaroid", "Lomo"]),
    ])
}

fn main() -> Result<(), StripError> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let mut strip = ExpandableStrip::new(demo_catalog(), ConsoleHost::default());

    strip.section_focus_changed.connect(|section| match section {
        Some(section) => println!("  signal: section {section} expanded"),
        None => println!("  signal: all sections collapsed"),
    });
    strip
        .item_selected
        .connect(|index| println!("  signal: selected {index}"));
    strip
        .leading_section_changed()
        .connect(|section| println!("  signal: leading section {section:?}"));

    println!("Tap header 'Warm'");
    strip.on_header_tapped(1)?;
    settle(&mut strip);

    println!("Tap item 'Ember'");
    strip.select_index_path(IndexPath::new(1, 1))?;

    println!("Next, next (crosses into 'Film')");
    strip.select_next(true)?;
    strip.select_next(true)?;
    settle(&mut strip);

    println!("Previous (back into 'Warm')");
    strip.select_previous(true)?;
    settle(&mut strip);

    println!("User drags the strip");
    strip.on_scroll(ScrollDriver::Dragging, [1, 2]);
    strip.on_scroll(ScrollDriver::Decelerating, [2]);

    println!("Tap header 'Warm' again");
    strip.on_header_tapped(1)?;
    settle(&mut strip);

    let binding = strip.binding();
    println!();
    println!("Final layout:");
    for section in 0..binding.number_of_sections() {
        let header = binding.header_content(section)?;
        println!(
            "  {:<5} items: {}  footer: {}",
            header.text,
            binding.number_of_items_in_section(section),
            binding.footer_size(section).width
        );
    }

    Ok(())
}
