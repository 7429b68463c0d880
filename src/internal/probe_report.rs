#![allow(clippy::missing_docs_in_private_items)]
#![allow(clippy::arithmetic_side_effects)]
#![allow(clippy::indexing_slicing)]
#![allow(clippy::pedantic)]

use std::collections::HashSet;
use std::iter;

use linprobe::LinearProbingMap;
use plotters::prelude::*;
use rand::Rng;

// A prime capacity, so key hashes spread evenly over the slots
const TABLE_SIZE: usize = 100_003;
// Load factors from 0.10 to 0.65 in 10 steps, all below the growth threshold
const NUM_LOAD_FACTORS: usize = 10;
const MIN_LOAD_FACTOR: f64 = 0.10;
const MAX_LOAD_FACTOR: f64 = 0.65;

const SCENARIOS: [&str; 2] = ["Fresh Inserts", "After Delete/Re-insert Churn"];

const FONT_FAMILY: &str = "sans-serif";
const COLORS: [RGBColor; 2] = [
    RGBColor(220, 50, 50), // Bright red
    RGBColor(50, 90, 220), // Bright blue
];
const LINE_WIDTH: u32 = 2;
const MARKER_SIZE: i32 = 4;
const TEXT_SIZE: i32 = 16;
const TITLE_SIZE: i32 = 35;

/// Probe statistics for one table state
struct Measurement {
    avg_probes: f64,
    worst_probes: usize,
    tombstones: usize,
}

// Looks every live key up once and records how many slots each lookup examined
fn measure(map: &LinearProbingMap<u64, u64>, live_keys: &[u64]) -> Measurement {
    let lengths: Vec<usize> = live_keys.iter().filter_map(|key| map.probe_length(key)).collect();
    let avg_probes = if lengths.is_empty() {
        0.0
    } else {
        lengths.iter().sum::<usize>() as f64 / lengths.len() as f64
    };

    Measurement {
        avg_probes,
        worst_probes: lengths.iter().copied().max().unwrap_or(0),
        tombstones: map.tombstone_count(),
    }
}

// Removes every other key, then refills the table back to the same size with spare keys.
// Returns the keys that are live afterwards.
fn churn(
    map: &mut LinearProbingMap<u64, u64>,
    keys: &[u64],
    spare: &[u64],
) -> Result<Vec<u64>, Box<dyn std::error::Error>> {
    let mut live = Vec::with_capacity(keys.len());
    let mut removed = 0;

    for (i, &key) in keys.iter().enumerate() {
        if i % 2 == 0 {
            map.remove(&key)?;
            removed += 1;
        } else {
            live.push(key);
        }
    }

    for &key in spare.iter().take(removed) {
        map.put(key, key);
        live.push(key);
    }

    Ok(live)
}

fn plot(
    path: &str,
    caption: &str,
    y_desc: &str,
    load_factors: &[f64],
    series: &[Vec<f64>],
) -> Result<(), Box<dyn std::error::Error>> {
    let root = BitMapBackend::new(path, (1200, 800)).into_drawing_area();
    root.fill(&WHITE)?;

    let max_y = series.iter().flat_map(|v| v.iter()).fold(1.0_f64, |max, &x| max.max(x)) * 1.1; // Add 10% margin

    let mut chart = ChartBuilder::on(&root)
        .caption(caption, (FONT_FAMILY, TITLE_SIZE))
        .margin(15)
        .x_label_area_size(60)
        .y_label_area_size(60)
        .right_y_label_area_size(10)
        .build_cartesian_2d(0.0..0.7, 0.0..max_y)?;

    chart
        .configure_mesh()
        .x_desc("Load Factor")
        .y_desc(y_desc)
        .axis_desc_style((FONT_FAMILY, TEXT_SIZE))
        .draw()?;

    for (idx, (&scenario, values)) in SCENARIOS.iter().zip(series).enumerate() {
        let color = COLORS[idx % COLORS.len()];
        let line_style = ShapeStyle::from(&color).stroke_width(LINE_WIDTH);

        chart
            .draw_series(LineSeries::new(
                load_factors.iter().copied().zip(values.iter().copied()),
                line_style,
            ))?
            .label(scenario)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], line_style));

        chart.draw_series(
            load_factors
                .iter()
                .zip(values)
                .map(|(&x, &y)| Circle::new((x, y), MARKER_SIZE, color.filled())),
        )?;
    }

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .position(SeriesLabelPosition::UpperLeft)
        .draw()?;

    root.present()?;
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let load_factors: Vec<f64> = (0..NUM_LOAD_FACTORS)
        .map(|i| {
            MIN_LOAD_FACTOR +
                (MAX_LOAD_FACTOR - MIN_LOAD_FACTOR) * (i as f64) /
                    ((NUM_LOAD_FACTORS - 1) as f64)
        })
        .collect();

    let num_keys: Vec<usize> =
        load_factors.iter().map(|&load| (TABLE_SIZE as f64 * load) as usize).collect();

    println!("Load factors: {:?}", load_factors);
    println!("Number of keys: {:?}", num_keys);

    // Generate distinct random keys up front so both scenarios see the same inputs
    let mut rng = rand::rng();
    let max_keys_needed = num_keys.iter().copied().max().unwrap_or(0);
    let mut seen = HashSet::with_capacity(max_keys_needed * 2);
    let all_keys: Vec<u64> = iter::repeat_with(|| rng.random::<u64>())
        .filter(|key| seen.insert(*key))
        .take(max_keys_needed * 2)
        .collect();
    let (keys, spare) = all_keys.split_at(max_keys_needed);

    let mut average_probes: Vec<Vec<f64>> = vec![Vec::new(); SCENARIOS.len()];
    let mut worst_case_probes: Vec<Vec<f64>> = vec![Vec::new(); SCENARIOS.len()];

    for &n_keys in &num_keys {
        println!("Testing with {} keys", n_keys);
        let keys = &keys[..n_keys];

        let mut map = LinearProbingMap::with_capacity(TABLE_SIZE);
        map.extend(keys.iter().map(|&key| (key, key)));
        let fresh = measure(&map, keys);

        let live = churn(&mut map, keys, spare)?;
        let churned = measure(&map, &live);

        for (idx, result) in [fresh, churned].iter().enumerate() {
            average_probes[idx].push(result.avg_probes);
            worst_case_probes[idx].push(result.worst_probes as f64);

            println!(
                "  {}: Avg probes = {:.2}, Worst = {}, Tombstones = {}",
                SCENARIOS[idx], result.avg_probes, result.worst_probes, result.tombstones
            );
        }
    }

    plot(
        "average_probe_length.png",
        "Average Probe Length of Successful Lookups",
        "Average Probes",
        &load_factors,
        &average_probes,
    )?;
    plot(
        "worst_case_probes.png",
        "Worst-Case Probe Length of Successful Lookups",
        "Worst-Case Probes",
        &load_factors,
        &worst_case_probes,
    )?;

    println!("Generated plot images: average_probe_length.png, worst_case_probes.png");

    Ok(())
}
