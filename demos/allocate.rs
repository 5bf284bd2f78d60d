// Walk-through of a full allocation run: expand a seed demand against the
// plant master data, build the container pool, solve, print the plan.

use plantopt::{
    expand_demand, AllocationOutcome, AllocationPlanner, Container, DemandLine, PlantVariety,
    SolverConfig, SolverFactory, SuitabilityMatrix,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let master = vec![
        PlantVariety::new("tomato", 30.0, 20.0),
        PlantVariety::new("basil", 10.0, 2.0),
        PlantVariety::new("mint", 10.0, 3.0),
        PlantVariety::new("carrot", 25.0, 5.0),
    ];
    let demand = vec![
        DemandLine::new("tomato", 2),
        DemandLine::new("basil", 3),
        DemandLine::new("mint", 1),
        DemandLine::new("carrot", 2),
    ];
    let plants = expand_demand(&demand, &master)?;

    let containers = vec![
        Container::new("balcony tub", 45.0, 40.0),
        Container::new("window trough", 12.0, 30.0),
        Container::new("window trough", 12.0, 30.0),
        Container::new("terracotta pot", 5.0, 15.0),
    ];

    let suitability = SuitabilityMatrix::build(&containers, &plants);
    let planner = AllocationPlanner::new(
        SolverFactory::default_solver()?,
        SolverConfig::default().with_gap_tolerance(0.01).with_threads(2),
    );

    match planner.plan(&plants, &containers, &suitability)? {
        AllocationOutcome::Optimal(plan) => print!("{plan}"),
        AllocationOutcome::Infeasible => println!("no valid placement exists for this demand"),
        AllocationOutcome::Unresolved(status) => println!("solver stopped early: {status}"),
    }

    Ok(())
}
