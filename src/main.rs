use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use ui_hints::dump::dump_elements;
use ui_hints::event::{EventQueue, UiEvent};
use ui_hints::{Element, ElementKind, ElementRegistry, HintBinder, TooltipTable};

/// Demo host: builds a settings panel, binds hover help, prints the result.
#[derive(Parser, Debug)]
#[command(name = "ui-hints", version, about)]
struct Args {
    /// Extra hint overlay file (flat JSON object of key to description).
    #[arg(long)]
    hints: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let mut table = TooltipTable::load_default();
    if let Some(ref path) = args.hints {
        table = table.with_overlay_file(path)?;
    }

    let mut registry = demo_panel();
    let mut binder = HintBinder::new(table);
    let mut queue = EventQueue::new();

    // First render
    queue.push(UiEvent::ui_updated());
    binder.pump(&mut queue, &mut registry);

    // Simulate the user switching the animation mode
    if let Some(id) = registry.get_id_by_name("AnimationMode") {
        if let Some(element) = registry.get_mut(id) {
            element.set_value("3D");
        }
        queue.push(UiEvent::value_changed(id));
    }
    binder.pump(&mut queue, &mut registry);

    print!("{}", dump_elements(&registry));
    Ok(())
}

/// A small generative-animation settings panel.
fn demo_panel() -> ElementRegistry {
    let mut registry = ElementRegistry::new();

    registry.register(Element::new(ElementKind::Label, "Seed").with_name("SeedLabel"));
    registry.register(Element::new(ElementKind::Label, "Max frames"));
    registry.register(Element::new(ElementKind::Label, "FPS"));
    registry.register(
        Element::new(ElementKind::Select, "Animation mode")
            .with_name("AnimationMode")
            .with_value("2D"),
    );
    registry.register(
        Element::new(ElementKind::Select, "Border")
            .with_name("BorderMode")
            .with_value("replicate"),
    );
    registry.register(Element::new(ElementKind::Checkbox, "Restore faces"));
    registry.register(
        Element::new(ElementKind::Button, "Preview motion").with_classes(["motion-preview"]),
    );

    registry
}
