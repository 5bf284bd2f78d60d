// Grid mode: place one seed per cell of a growing bed and print the layout.

use plantopt::{GardenGrid, GridModel, Plant, SolverConfig, SolverFactory};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let plants = vec![
        Plant::new("basil", 10.0, 2.0),
        Plant::new("mint", 10.0, 3.0),
        Plant::new("thyme", 10.0, 1.0),
        Plant::new("parsley", 10.0, 2.0),
    ];
    let grid = GardenGrid::from_dimensions(120.0, 60.0, 30.0);
    let model = GridModel::build(&plants, &grid);

    let solver = SolverFactory::default_solver()?;
    let solution = solver.solve(model.problem(), &SolverConfig::default())?;
    if !solution.status.is_decodable() {
        println!("no layout found: {}", solution.status);
        return Ok(());
    }

    let bed = model.decode(&solution, &plants)?;
    for row in &bed {
        let cells: Vec<&str> = row
            .iter()
            .map(|cell| cell.as_deref().unwrap_or("."))
            .collect();
        println!("{}", cells.join(" | "));
    }

    Ok(())
}
