use std::env;
use std::fmt::Display;
use std::sync::Once;

use tracing::{debug, info};
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    prelude::*,
    EnvFilter,
};

use crate::application::render_lines;
use crate::domain::{BinaryTree, Forest, Style};

static TEST_SETUP: Once = Once::new();

pub fn init_test_setup() {
    TEST_SETUP.call_once(|| {
        // global logging subscriber, used by all tracing log macros
        setup_test_logging();
        info!("Test Setup complete");
    });
}

fn setup_test_logging() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("treevis=debug"));

    let subscriber = tracing_subscriber::registry().with(
        fmt::layer()
            .with_test_writer()
            .with_target(true)
            .with_thread_names(false)
            .with_span_events(FmtSpan::CLOSE)
            .with_filter(env_filter),
    );

    // Only set if we haven't already set a global subscriber
    if tracing::dispatcher::has_been_set() {
        debug!("Tracing subscriber already set");
    } else {
        subscriber.try_init().unwrap_or_else(|e| {
            eprintln!("Error: Failed to set up logging: {}", e);
        });
    }
    debug!("RUST_LOG={:?}", env::var("RUST_LOG").ok());
}

/// Lays out `trees` as one forest and returns the uncolored lines.
pub fn render_plain<T: Display>(trees: &[&BinaryTree<T>]) -> Vec<String> {
    let forest = Forest::build(trees.iter().map(|tree| tree.root_ref()))
        .unwrap_or_else(|e| panic!("layout failed: {}", e));
    render_lines(&forest, Style::Plain)
}

/// Search tree built from `values` in insertion order.
pub fn search_tree<T: Ord + Clone>(values: &[T]) -> BinaryTree<T> {
    values.iter().cloned().collect()
}
