use colored::Colorize;
use comfy_table::{Cell, Table};

use crate::cli::{build_generator, name_for, GeneratorArgs};
use crate::codes::CodeKind;
use crate::error::Result;
use crate::settings::load_settings;

pub fn run(args: &GeneratorArgs) -> Result<()> {
    let settings = load_settings();
    let mut generator = build_generator(args, &settings)?;

    let mut table = Table::new();
    table.set_header(vec!["Kind", "Title", "Code", "Description"]);
    for kind in CodeKind::ALL {
        let code = generator.generate(kind, name_for(kind, None, &settings));
        table.add_row(vec![
            Cell::new(kind),
            Cell::new(kind.title()),
            Cell::new(code),
            Cell::new(kind.description()),
        ]);
    }
    println!("{}\n{table}", "Reference Codes".bold());
    Ok(())
}
