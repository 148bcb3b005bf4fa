//! Walks through every tree operation on a small example and reports each result, then does the
//! same for the stack and queue.
//!
//! The log level comes from `BST_LOG` (e.g. `BST_LOG=trace` to see the tree's own trace output)
//! and defaults to `info`.

use std::env;
use std::error::Error;
use std::str::FromStr;

use bst::{stack, Queue, Stack, Tree};
use log::{info, LevelFilter};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

fn initialize_logging() -> Result<(), Box<dyn Error>> {
    let level = match env::var("BST_LOG") {
        Ok(level) => LevelFilter::from_str(&level)?,
        Err(_) => LevelFilter::Info,
    };
    TermLogger::init(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )?;
    Ok(())
}

fn found(hit: bool) -> &'static str {
    if hit {
        "Found"
    } else {
        "Not Found"
    }
}

fn tree_example() {
    let mut tree = Tree::new();
    for key in [50, 30, 20, 40, 70, 60, 80] {
        tree.insert(key);
    }

    info!("--- Binary Search Tree Example ---");
    info!("Inorder Traversal (sorted): {:?}", tree.inorder());
    info!("Search for 40: {}", found(tree.search(&40)));
    info!("Search for 90: {}", found(tree.search(&90)));
    for key in [20, 30, 50] {
        tree.delete(&key);
        info!(
            "Inorder Traversal after deleting {}: {:?}",
            key,
            tree.inorder()
        );
    }
    info!("Preorder Traversal: {:?}", tree.preorder());
    info!("Postorder Traversal: {:?}", tree.postorder());
    info!("Level Order Traversal: {:?}", tree.level_order());
    info!(
        "Iterative Inorder/Preorder/Postorder: {:?} / {:?} / {:?}",
        tree.inorder_iterative(),
        tree.preorder_iterative(),
        tree.postorder_iterative()
    );

    let balanced = Tree::from_sorted(&[10, 20, 30, 40, 50, 60, 70]);
    info!(
        "Minimal-Height BST Inorder Traversal: {:?}",
        balanced.inorder()
    );
    info!("Minimal-Height BST Level Order: {:?}", balanced.level_order());
    info!(
        "Height: {}, Balanced: {}",
        balanced.height(),
        balanced.is_balanced()
    );
    info!("--- End of BST Example ---");
}

fn stack_example() -> Result<(), Box<dyn Error>> {
    info!("--- Stack Example: Reversing a String ---");
    let original = "Hello, World!";
    info!("Original String: {}", original);
    info!("Reversed String: {}", stack::reverse(original));

    let mut stack = Stack::new();
    for item in [10, 20, 30] {
        stack.push(item);
        info!("Pushed: {}", item);
    }
    info!("Top element (peek): {}", stack.peek()?);
    while !stack.is_empty() {
        info!("Popped: {}", stack.pop()?);
    }
    info!("Is stack empty? {}", stack.is_empty());
    info!("--- End of Stack Example ---");
    Ok(())
}

fn queue_example() -> Result<(), Box<dyn Error>> {
    info!("--- Queue Example: Task Management ---");
    let mut queue = Queue::new();
    for task in ["Task 1", "Task 2", "Task 3"] {
        queue.enqueue(task);
        info!("Enqueued: {}", task);
    }
    info!("Current Queue: {}", queue);
    info!("Peek: {}", queue.peek()?);
    while !queue.is_empty() {
        info!("Dequeued: {}", queue.dequeue()?);
    }
    info!("Is queue empty? {}", queue.is_empty());
    info!("--- End of Queue Example ---");
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    initialize_logging()?;

    tree_example();
    stack_example()?;
    queue_example()?;
    Ok(())
}
