// crates/classlist-core/examples/playground.rs
// Run with: cargo run --example playground

use classlist_core::{Attachment, Model, parse_command};

fn run(model: &mut Model, line: &str) {
    println!("> {line}");
    let outcome = parse_command(line)
        .map_err(|e| e.to_string())
        .and_then(|command| command.execute(model).map_err(|e| e.to_string()));

    match outcome {
        Ok(result) => {
            println!("{}", result.feedback);
            if let Some(Attachment::GradeDistribution(distribution)) = &result.attachment {
                for (grade, count) in distribution.counts() {
                    println!("  {grade:<2} {}", "#".repeat(*count));
                }
            }
        }
        Err(message) => println!("error: {message}"),
    }
}

fn main() {
    println!("Class List Playground\n");
    let mut model = Model::default();

    println!("=== Adding students ===");
    run(&mut model, "add n/Alice Pauline id/A0000000A e/alice@example.com gr/A g/Group 1");
    run(&mut model, "add n/Benson Meier id/A0000001B e/benson@example.com gr/D");
    run(&mut model, "add n/Carl Kurz id/A0000002C e/carl@example.com gr/C g/Group 2");
    run(&mut model, "add n/Carl Clone id/A0000002C e/clone@example.com gr/B");

    println!("\n=== Display order (weakest first) ===");
    for (i, person) in model.filtered_persons().iter().enumerate() {
        println!("{}. {person}", i + 1);
    }

    println!("\n=== Groups ===");
    run(&mut model, "group g/Group 99 id/A0000000A id/A0000001B");
    run(&mut model, "group g/Group 99 id/A9999999Z");

    println!("\n=== Remarks and filters ===");
    run(&mut model, "remark 1 r/Needs help with recursion");
    run(&mut model, "weak");
    run(&mut model, "find alice");
    run(&mut model, "list");

    println!("\n=== Archive ===");
    run(&mut model, "archive A0000001B");
    run(&mut model, "archived");
    for person in model.filtered_archived_persons() {
        println!("  {person}");
    }
    run(&mut model, "unarchive A0000001B");

    println!("\n=== Summary ===");
    run(&mut model, "summary");
}
