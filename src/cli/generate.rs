use tracing::warn;

use crate::cli::{build_generator, name_for, GeneratorArgs};
use crate::codes::CodeKind;
use crate::error::Result;
use crate::settings::load_settings;

pub fn run(kind: CodeKind, name: Option<&str>, count: usize, args: &GeneratorArgs) -> Result<()> {
    if name.is_some() && !kind.takes_name() {
        warn!("{kind} codes do not embed a name; ignoring --name");
    }
    let settings = load_settings();
    let mut generator = build_generator(args, &settings)?;
    let name = name_for(kind, name, &settings);
    for _ in 0..count {
        println!("{}", generator.generate(kind, name));
    }
    Ok(())
}
