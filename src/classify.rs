use crate::error::{CliError, Result};
use crate::ui;
use package_sorting::{classify_package, validate, Category, RawPackageInput, SortResponse};

#[derive(Debug, Clone)]
pub struct ClassifyArgs {
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub length: Option<f64>,
    pub mass: Option<f64>,
    pub json: bool,
}

pub fn execute(args: ClassifyArgs) -> Result<()> {
    let category = run(&args)?;

    if args.json {
        println!("{}", serde_json::to_string(&SortResponse::new(category))?);
    } else {
        println!("{}", ui::category_label(category));
    }
    Ok(())
}

/// Validate and classify the package described by the flags
fn run(args: &ClassifyArgs) -> Result<Category> {
    let raw = RawPackageInput {
        width: args.width,
        height: args.height,
        length: args.length,
        mass: args.mass,
    };

    let measurement = validate(&raw).map_err(CliError::InvalidPackage)?;
    Ok(classify_package(&measurement))
}
