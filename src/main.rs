use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use texgen::config::ConfigManager;
use texgen::{Evaluator, Extent, FieldGenerator, NodeCounts, SimplexNoise, TreeGrower};

#[derive(Serialize)]
struct RunSummary {
    tree: String,
    counts: NodeCounts,
    depth: usize,
    tree_range: Extent,
    noise_range: Extent,
    width: usize,
    height: usize,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let manager = ConfigManager::new();
    manager.load_layered(std::env::args().nth(1))?;
    let config = manager.get();

    let mut rng = match config.growth.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let tree = TreeGrower::new(config.growth.clone()).grow(&mut rng);
    let (width, height) = (config.noise.width, config.noise.height);

    let evaluator = Evaluator::new(SimplexNoise::new(config.noise.seed));
    let sampled = evaluator.sample_grid(&tree, width, height)?;

    let generator = FieldGenerator::new(SimplexNoise::new(config.noise.seed));
    let field = generator.generate(&config.noise)?;

    let summary = RunSummary {
        tree: tree.to_string(),
        counts: tree.node_counts(),
        depth: tree.depth(),
        tree_range: sampled.extent(),
        noise_range: field.extent(),
        width,
        height,
    };
    println!("{}", serde_json::to_string_pretty(&summary)?);

    Ok(())
}
