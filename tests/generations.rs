use parallel_life::{
    ExecutionStrategy, GenerationDriver, Grid, MemorySink, SimRng, TileShape, populate,
};
use rand::SeedableRng;

const STRATEGIES: [ExecutionStrategy; 2] =
    [ExecutionStrategy::Sequential, ExecutionStrategy::Parallel];

fn driver(strategy: ExecutionStrategy, shape: TileShape) -> GenerationDriver {
    GenerationDriver::new(strategy, shape, 1000, Box::new(MemorySink::new()))
}

fn live_cells(grid: &Grid) -> Vec<(usize, usize)> {
    let mut cells = Vec::new();
    for row in 0..grid.size() {
        for col in 0..grid.size() {
            if grid.get(row, col) == 1 {
                cells.push((row, col));
            }
        }
    }
    cells
}

fn grid_with(size: usize, alive: &[(usize, usize)]) -> Grid {
    let mut grid = Grid::new(size);
    for &(row, col) in alive {
        grid.set(row, col, 1);
    }
    grid
}

#[test]
fn dead_grid_stays_dead() {
    for strategy in STRATEGIES {
        let mut input = Grid::new(16);
        let mut output = Grid::new(16);
        let mut driver = driver(strategy, TileShape::new(3, 5));
        for _ in 0..5 {
            driver.advance(&mut input, &mut output);
            assert_eq!(input.population(), 0, "{:?}", strategy);
        }
    }
}

// With the centre cell counted, the end cells of a horizontal triple keep a sum
// of 2 and survive, so the line grows into a plus instead of flipping vertical.
#[test]
fn three_cell_line_grows_then_dies_out() {
    for strategy in STRATEGIES {
        let mut input = grid_with(5, &[(2, 1), (2, 2), (2, 3)]);
        let mut output = Grid::new(5);
        let mut driver = driver(strategy, TileShape::new(1, 2));

        driver.advance(&mut input, &mut output);
        assert_eq!(
            live_cells(&input),
            [(1, 2), (2, 1), (2, 2), (2, 3), (3, 2)],
            "{:?}",
            strategy
        );

        driver.advance(&mut input, &mut output);
        assert_eq!(
            live_cells(&input),
            [(1, 1), (1, 3), (3, 1), (3, 3)],
            "{:?}",
            strategy
        );

        driver.advance(&mut input, &mut output);
        assert!(live_cells(&input).is_empty(), "{:?}", strategy);
    }
}

#[test]
fn domino_is_a_still_life() {
    for strategy in STRATEGIES {
        let start = grid_with(8, &[(3, 3), (3, 4)]);
        let mut input = start.clone();
        let mut output = Grid::new(8);
        let mut driver = driver(strategy, TileShape::new(2, 2));
        for _ in 0..10 {
            driver.advance(&mut input, &mut output);
            assert_eq!(input, start, "{:?}", strategy);
        }
    }
}

// Each cell of a 2x2 block sums to 4 with itself included, which is overcrowding.
#[test]
fn block_dies_in_one_generation() {
    for strategy in STRATEGIES {
        let mut input = grid_with(6, &[(2, 2), (2, 3), (3, 2), (3, 3)]);
        let mut output = Grid::new(6);
        driver(strategy, TileShape::default()).advance(&mut input, &mut output);
        assert_eq!(input.population(), 0, "{:?}", strategy);
    }
}

#[test]
fn border_cells_come_from_output_buffer_only() {
    for strategy in STRATEGIES {
        let size = 12;
        let mut input = Grid::new(size);
        populate(
            &mut input,
            ExecutionStrategy::Sequential,
            TileShape::default(),
            &mut SimRng::seed_from_u64(11),
        );

        let mut output = Grid::new(size);
        for i in 0..size {
            for (row, col) in [(0, i), (size - 1, i), (i, 0), (i, size - 1)] {
                output.set(row, col, 1);
            }
        }

        let mut driver = driver(strategy, TileShape::new(4, 4));
        for _ in 0..3 {
            driver.advance(&mut input, &mut output);
            for row in 0..size {
                for col in 0..size {
                    if input.is_border(row, col) {
                        assert_eq!(input.get(row, col), 1, "{:?} input ({}, {})", strategy, row, col);
                        assert_eq!(output.get(row, col), 1, "{:?} output", strategy);
                    }
                }
            }
        }
    }
}

#[test]
fn strategies_agree_over_many_generations() {
    let size = 96;
    let mut start = Grid::new(size);
    populate(
        &mut start,
        ExecutionStrategy::Parallel,
        TileShape::default(),
        &mut SimRng::seed_from_u64(2024),
    );

    let mut reference = start.clone();
    let mut reference_out = Grid::new(size);
    let mut serial = driver(ExecutionStrategy::Sequential, TileShape::default());

    let shapes = [
        TileShape::new(1, 1),
        TileShape::new(7, 13),
        TileShape::new(32, 96),
        TileShape::default(),
    ];
    let mut parallel: Vec<(Grid, Grid, GenerationDriver)> = shapes
        .iter()
        .map(|&shape| {
            let driver = driver(ExecutionStrategy::Parallel, shape);
            (start.clone(), Grid::new(size), driver)
        })
        .collect();

    for generation in 1..=40 {
        serial.advance(&mut reference, &mut reference_out);
        for (input, output, driver) in parallel.iter_mut() {
            driver.advance(input, output);
            assert_eq!(*input, reference, "diverged at generation {}", generation);
        }
    }
}

#[test]
fn tiny_grids_have_nothing_to_update() {
    for size in 1..3 {
        for strategy in STRATEGIES {
            let mut input = Grid::from_rows(&vec![vec![1u8; size]; size]).unwrap();
            let mut output = Grid::new(size);
            driver(strategy, TileShape::default()).advance(&mut input, &mut output);
            assert_eq!(input.population(), 0);
        }
    }
}
