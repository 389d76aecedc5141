//! Plankit command-line front end.
//!
//! Inspects plan files, converts them to SVG, and pushes exported
//! artifacts to an upload endpoint. The interactive canvas lives in the
//! host application; this binary drives the same editor core headlessly.

use anyhow::{bail, Context, Result};
use plankit::{init_logging, AssetUploader, EditorState, SceneEntry, BUILD_DATE, VERSION};
use plankit_editor::asset_file_name;

fn usage() -> String {
    format!(
        "plankit {VERSION} (built {BUILD_DATE})\n\
         \n\
         Usage: plankit <plan.json> [--svg <out.svg>] [--upload <endpoint>]\n\
         \n\
         Loads a plan file, prints a summary, and optionally exports the scene\n\
         as SVG or uploads the rendered artifact to the given endpoint."
    )
}

#[tokio::main]
async fn main() -> Result<()> {
    init_logging()?;

    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some(plan_path) = args.first().filter(|a| !a.starts_with("--")) else {
        bail!("{}", usage());
    };

    let mut svg_out: Option<String> = None;
    let mut upload_endpoint: Option<String> = None;
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--svg" => {
                svg_out = Some(
                    args.get(i + 1)
                        .cloned()
                        .context("--svg requires an output path")?,
                );
                i += 2;
            }
            "--upload" => {
                upload_endpoint = Some(
                    args.get(i + 1)
                        .cloned()
                        .context("--upload requires an endpoint URL")?,
                );
                i += 2;
            }
            other => bail!("unknown argument: {other}\n{}", usage()),
        }
    }

    let mut editor = EditorState::new();
    editor
        .load_from_file(plan_path)
        .with_context(|| format!("failed to load {plan_path}"))?;

    print_summary(&editor);

    if let Some(path) = svg_out {
        std::fs::write(&path, editor.export_svg())
            .with_context(|| format!("failed to write {path}"))?;
        println!("SVG written to {path}");
    }

    if let Some(endpoint) = upload_endpoint {
        let file_name = asset_file_name(editor.plan_name(), "2D", "svg");
        let svg = editor.export_svg();
        let uploader = AssetUploader::new(endpoint)?;
        let stored = uploader
            .upload(&file_name, svg.into_bytes(), "image/svg+xml")
            .await?;
        println!("Uploaded as {stored}");
    }

    Ok(())
}

fn print_summary(editor: &EditorState) {
    let scene = editor.scene();
    let shapes = scene
        .iter()
        .filter(|e| matches!(e, SceneEntry::Shape(_)))
        .count();
    let groups = scene.len() - shapes;

    println!("Plan:    {}", editor.display_name());
    println!("Entries: {} ({} shapes, {} groups)", scene.len(), shapes, groups);
    println!("Grid:    {} units, visible: {}", editor.grid().size, editor.grid().visible);
    println!("View:    {}", editor.viewport());
    println!("Export:  {}", editor.export_file_name());
}
