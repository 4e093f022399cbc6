//! Generates a minimal master template PDF for deployments that do not ship
//! their own. The overlay path stamps firm name and tax number onto the
//! first page of whatever template is configured.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};

#[derive(Parser)]
#[command(name = "make-template", about = "Write a minimal master template PDF")]
struct Args {
    /// Output path for the template
    #[arg(default_value = "templates/master.pdf")]
    output: PathBuf,

    /// Title printed at the top of the template page
    #[arg(long, default_value = "Registration Certificate")]
    title: String,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! { "F1" => font_id },
    });

    let content = Content {
        operations: vec![
            Operation::new("BT", vec![]),
            Operation::new("Tf", vec!["F1".into(), 18.into()]),
            Operation::new("Td", vec![100.into(), 740.into()]),
            Operation::new("Tj", vec![Object::string_literal(args.title.as_str())]),
            Operation::new("ET", vec![]),
        ],
    };
    let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode()?));

    let page_id = doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => pages_id,
        "Contents" => content_id,
    });
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => vec![page_id.into()],
            "Count" => 1,
            "Resources" => resources_id,
            "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    if let Some(parent) = args.output.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("creating {}", parent.display()))?;
    }
    doc.save(&args.output)
        .with_context(|| format!("writing {}", args.output.display()))?;

    println!("Wrote template to {}", args.output.display());
    Ok(())
}
