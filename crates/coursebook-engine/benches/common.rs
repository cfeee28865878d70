// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_module(chapters: usize) -> String {
    let mut content = String::from(
        "# Generated Course\n\n**A lead paragraph for the hero region.**\n\n⏱ 20 min | 📊 Intermediate\n\n---\n\n",
    );

    for chapter in 0..chapters {
        content.push_str(&format!("# Chapter {}\n\n", chapter));
        content.push_str(&generate_section(chapter, 2));
        content.push_str(&generate_section(chapter, 3));
    }

    content
}

#[allow(dead_code)]
fn generate_section(chapter: usize, level: usize) -> String {
    let mut content = String::new();
    let header_prefix = "#".repeat(level);

    content.push_str(&format!("{} Part {}.{}\n\n", header_prefix, chapter, level));
    content.push_str("Some paragraph content with multiple sentences.\nIt wraps onto a second line for realism.\n\n");
    content.push_str(":::tip[Remember]\nShort hint inside a fenced callout.\n:::\n\n");
    content.push_str("> ### 💡 Insight\n> Quoted insight body.\n\n");

    for i in 0..3 {
        content.push_str(&format!("- Item {} in chapter {}\n", i, chapter));
    }
    content.push('\n');

    content.push_str("| Term | Meaning |\n| --- | --- |\n| Epoch | One pass |\n\n");
    content.push_str("```python\nfor step in range(10):\n    train(step)\n```\n\n");
    content.push_str("<div style=\"border: 1px solid\"><b>Legacy box</b>Old body.</div>\n\n");
    content
}

#[allow(dead_code)]
pub fn generate_slots(count: usize) -> Vec<coursebook_engine::ModuleVisualSlot> {
    use coursebook_engine::{ModuleVisualSlot, SlotType};

    (0..count)
        .map(|i| {
            let slot_type = match i % 3 {
                0 => SlotType::Header,
                1 => SlotType::Diagram,
                _ => SlotType::Inline,
            };
            ModuleVisualSlot::new(format!("slot-{i}"), slot_type).at((i * 7) as i64)
        })
        .collect()
}
