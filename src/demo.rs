use crate::error::Result;
use crate::ui;
use comfy_table::{
    modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL, Attribute, Cell, CellAlignment,
    ContentArrangement, Table,
};
use package_sorting::{assess, Assessment};

/// A sample package shown by the demo
struct SamplePackage {
    description: &'static str,
    width: f64,
    height: f64,
    length: f64,
    mass: f64,
}

const SAMPLES: [SamplePackage; 5] = [
    SamplePackage {
        description: "Standard package",
        width: 50.0,
        height: 50.0,
        length: 50.0,
        mass: 10.0,
    },
    SamplePackage {
        description: "Bulky by dimension",
        width: 150.0,
        height: 50.0,
        length: 50.0,
        mass: 10.0,
    },
    SamplePackage {
        description: "Bulky by volume",
        width: 100.0,
        height: 100.0,
        length: 100.0,
        mass: 10.0,
    },
    SamplePackage {
        description: "Heavy package",
        width: 50.0,
        height: 50.0,
        length: 50.0,
        mass: 20.0,
    },
    SamplePackage {
        description: "Bulky and heavy",
        width: 150.0,
        height: 100.0,
        length: 100.0,
        mass: 25.0,
    },
];

pub fn execute() -> Result<()> {
    ui::section_header("Package Sorting Demo");
    println!("{}", render_table());
    Ok(())
}

fn render_table() -> String {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(
        ["Package", "Dimensions (cm)", "Volume (cm³)", "Mass (kg)", "Bulky", "Heavy", "Result"]
            .into_iter()
            .map(|header| Cell::new(header).add_attribute(Attribute::Bold)),
    );

    for sample in &SAMPLES {
        let assessment = assess(sample.width, sample.height, sample.length, sample.mass);
        table.add_row(sample_row(sample, &assessment));
    }

    table.to_string()
}

fn sample_row(sample: &SamplePackage, assessment: &Assessment) -> Vec<Cell> {
    vec![
        Cell::new(sample.description),
        Cell::new(format!(
            "{:.0} x {:.0} x {:.0}",
            sample.width, sample.height, sample.length
        )),
        Cell::new(format!("{:.0}", assessment.volume)).set_alignment(CellAlignment::Right),
        Cell::new(format!("{:.0}", sample.mass)).set_alignment(CellAlignment::Right),
        Cell::new(yes_no(assessment.bulky)),
        Cell::new(yes_no(assessment.heavy)),
        Cell::new(ui::category_label(assessment.category())),
    ]
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "yes"
    } else {
        "no"
    }
}
