//! Inspects a behavior's property declarations.
//!
//! Usage: `props-inspect <defs.json> [assignments.json]`
//!
//! Loads the declarations (a JSON array of property definitions), applies
//! stored assignments if given, prints one line per property and then the
//! resulting assignments as JSON. Set `RUST_LOG=warn` to see literal
//! fallbacks.

use std::fs;
use std::process::ExitCode;

use behavior_props::{
    load_editables, serialize_all, value_map, Assignment, Editable, PropDef, PropValue,
};

fn format_value(value: &PropValue) -> String {
    match value {
        PropValue::Number(v) => v.to_string(),
        PropValue::Decimal(v) => format!("{v:.3}"),
        PropValue::Boolean(v) => v.to_string(),
        PropValue::Actor(None) => "<none>".to_string(),
        PropValue::Actor(Some(v)) => format!("{v:?}"),
        PropValue::String(v)
        | PropValue::Prefab(v)
        | PropValue::Sound(v)
        | PropValue::ParticleEffect(v)
        | PropValue::ActorGroup(v)
        | PropValue::Image(v)
        | PropValue::Color(v)
        | PropValue::Enum(v) => format!("{v:?}"),
        PropValue::CardDeck(v)
        | PropValue::StringArray(v)
        | PropValue::EnumArray(v)
        | PropValue::ActorArray(v) => format!("{v:?}"),
        PropValue::NumberArray(v) => format!("{v:?}"),
    }
}

fn read_json<T: serde::de::DeserializeOwned>(path: &str) -> Result<T, String> {
    let text = fs::read_to_string(path).map_err(|e| format!("failed to read {path}: {e}"))?;
    serde_json::from_str(&text).map_err(|e| format!("failed to parse {path}: {e}"))
}

fn print_editable(editable: &Editable, visible: bool) {
    println!(
        "  {:<24} {:<15} {:<10} {:<7} {}",
        editable.variable_name(),
        editable.prop_type.as_str(),
        editable.prop_type.wire_type().as_str(),
        if visible { "shown" } else { "hidden" },
        format_value(&editable.data),
    );
}

fn run(args: &[String]) -> Result<(), String> {
    let defs_path = args
        .first()
        .ok_or_else(|| "usage: props-inspect <defs.json> [assignments.json]".to_string())?;

    let defs: Vec<PropDef> = read_json(defs_path)?;
    let assignments: Vec<Assignment> = match args.get(1) {
        Some(path) => read_json(path)?,
        None => Vec::new(),
    };
    log::info!("{} declarations, {} stored assignments", defs.len(), assignments.len());

    let editables = load_editables(&defs, assignments).map_err(|e| e.to_string())?;
    let values = value_map(&editables);

    println!("Properties ({}):", editables.len());
    for editable in &editables {
        print_editable(editable, editable.def.is_visible(&values));
    }

    let out = serialize_all(&editables).map_err(|e| e.to_string())?;
    let json = serde_json::to_string_pretty(&out).map_err(|e| e.to_string())?;
    println!("\nAssignments:\n{json}");
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("error: {message}");
            ExitCode::FAILURE
        }
    }
}
