#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;

    use float_cmp::approx_eq;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;
    use test_case::test_case;

    use kbench::chart::{ChartOptions, ChartTheme, Color, X_LABEL, Y_LABEL, column_chart, line_chart};
    use kbench::config::BenchConfig;
    use kbench::generator::{GeneratorConfig, InstanceGenerator};
    use kbench::harness::{self, BenchRun, Sample};
    use kbench::io;
    use kbench::io::output::BenchOutput;
    use knapsack_rs::solvers::{ExactSolver, GreedySolver, Solver};

    fn init_logger() {
        let _ = env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .is_test(true)
            .try_init();
    }

    fn generator(seed: u64, config: GeneratorConfig) -> InstanceGenerator {
        InstanceGenerator::new(config, SmallRng::seed_from_u64(seed))
    }

    fn small_config() -> GeneratorConfig {
        GeneratorConfig {
            max_items: 20,
            max_value: 100,
            max_weight: 100,
        }
    }

    fn temp_folder(name: &str) -> PathBuf {
        let folder = std::env::temp_dir().join(format!("kbench_{name}_{}", std::process::id()));
        let _ = fs::remove_dir_all(&folder);
        folder
    }

    #[test]
    fn generated_instances_respect_bounds() {
        let config = GeneratorConfig::default();
        let mut generator = generator(0, config);
        for _ in 0..100 {
            let instance = generator.generate(false).unwrap();
            assert!((1..=config.max_items).contains(&instance.n_items()));
            assert!(instance.values().iter().all(|v| (1..=config.max_value).contains(v)));
            assert!(instance.weights().iter().all(|w| (1..=config.max_weight).contains(w)));
            assert!((1..=config.max_weight).contains(&instance.capacity()));
        }
    }

    #[test]
    fn harder_instances_keep_positive_weights() {
        let config = GeneratorConfig {
            max_items: 50,
            max_value: 3,
            max_weight: 2,
        };
        let mut generator = generator(1, config);
        for _ in 0..100 {
            let instance = generator.generate(true).unwrap();
            assert!(!instance.has_zero_weight_item());
            //scaled by at most 1.2
            assert!(instance.values().iter().all(|&v| v <= 3));
            assert!(instance.weights().iter().all(|&w| w <= 2));
        }
    }

    #[test_case(false; "plain")]
    #[test_case(true; "harder for greedy")]
    fn generator_is_reproducible(harder_for_greedy: bool) {
        let mut a = generator(42, small_config());
        let mut b = generator(42, small_config());
        for _ in 0..10 {
            assert_eq!(
                a.generate(harder_for_greedy).unwrap(),
                b.generate(harder_for_greedy).unwrap()
            );
        }
    }

    #[test]
    fn harness_records_every_test_case() {
        init_logger();
        let solver = ExactSolver::default();
        let run = harness::run(&solver, &mut generator(7, small_config()), 25, false).unwrap();
        assert_eq!(run.samples.len(), 25);
        assert_eq!(run.solver, "dynamic programming");
        assert!(!run.harder_for_greedy);
        assert!(run.samples.iter().all(|s| s.elapsed_ms >= 0.0));

        //the recorded values belong to the same instances the generator produces
        let mut replay = generator(7, small_config());
        for sample in &run.samples {
            let instance = replay.generate(false).unwrap();
            assert_eq!(sample.n_items, instance.n_items());
            assert_eq!(sample.capacity, instance.capacity());
            assert_eq!(Ok(sample.value), solver.solve(&instance));
        }
    }

    #[test]
    fn harness_with_greedy_solver() {
        let run = harness::run(&GreedySolver::default(), &mut generator(8, small_config()), 10, true)
            .unwrap();
        assert_eq!(run.elapsed_ms().len(), 10);
        assert!(run.samples.iter().all(|s| s.value >= 0.0));
    }

    #[test]
    fn harness_handles_huge_weights() {
        //the spanned table size saturates instead of overflowing
        let config = GeneratorConfig {
            max_items: 5,
            max_value: 10,
            max_weight: u64::MAX,
        };
        let run = harness::run(&GreedySolver::default(), &mut generator(9, config), 10, false)
            .unwrap();
        assert_eq!(run.samples.len(), 10);
    }

    #[test]
    fn summary_of_samples() {
        let sample = |elapsed_ms| Sample {
            n_items: 1,
            capacity: 1,
            elapsed_ms,
            value: 0u64,
        };
        let run = BenchRun {
            solver: "test".to_string(),
            harder_for_greedy: false,
            samples: vec![sample(2.0), sample(1.0), sample(6.0)],
        };
        let summary = run.summary().unwrap();
        assert!(approx_eq!(f64, summary.min_ms, 1.0));
        assert!(approx_eq!(f64, summary.max_ms, 6.0));
        assert!(approx_eq!(f64, summary.mean_ms, 3.0));
        assert!(approx_eq!(f64, summary.total_ms, 9.0));

        let empty = BenchRun::<u64> {
            samples: vec![],
            ..run
        };
        assert!(empty.summary().is_none());
    }

    #[test]
    fn line_chart_contains_labels_and_points() {
        let times = [0.5, 1.5, 0.25, 3.0];
        let svg = line_chart(&times, "Dynamic Programming Performance", Color(0, 0, 255), ChartOptions::default())
            .to_string();
        assert!(svg.contains("Dynamic Programming Performance"));
        assert!(svg.contains(X_LABEL));
        assert!(svg.contains(Y_LABEL));
        assert!(svg.contains("#0000FF"));
        assert_eq!(svg.matches("<circle").count(), times.len());
    }

    #[test]
    fn column_chart_draws_one_bar_per_test_case() {
        let times = [1.0, 2.0, 3.0];
        let svg = column_chart(&times, "Greedy Algorithm", Color(0, 128, 0), ChartOptions::default())
            .to_string();
        assert!(svg.contains("Execution Time for Greedy Algorithm"));
        //background + bars
        assert_eq!(svg.matches("<rect").count(), 1 + times.len());
    }

    #[test_case(&[]; "empty")]
    #[test_case(&[0.0, 0.0]; "all zero")]
    #[test_case(&[4.2]; "single")]
    fn degenerate_series_render(times: &[f64]) {
        let options = ChartOptions::default();
        for svg in [
            line_chart(times, "t", Color(0, 0, 0), options).to_string(),
            column_chart(times, "t", Color(0, 0, 0), options).to_string(),
        ] {
            assert!(!svg.contains("NaN"));
            assert!(!svg.contains("inf"));
        }
    }

    #[test]
    fn colors_parse_from_hex() {
        assert_eq!(Color::try_from("#00FF7f"), Ok(Color(0x00, 0xFF, 0x7F)));
        assert_eq!(Color::try_from("008000"), Ok(Color(0x00, 0x80, 0x00)));
        assert!(Color::try_from("#12345").is_err());
        assert!(Color::try_from("#GG0000").is_err());
        assert_eq!(format!("{}", ChartTheme::PRIMARY.exact_color), "#0000FF");
    }

    #[test]
    fn config_is_read_from_json() {
        let json = r##"{
            "prng_seed": null,
            "n_test_cases": 3,
            "generator": {"max_items": 5, "max_value": 10, "max_weight": 20},
            "dp_storage": "RollingRow",
            "exact_harder_for_greedy": true,
            "greedy_harder_for_greedy": false,
            "chart_options": {
                "theme": {
                    "stroke_width": 1.0,
                    "font_size": 12.0,
                    "background": "#FFFFFF",
                    "axis_color": "#000000",
                    "grid_color": "#EEEEEE",
                    "exact_color": "#FF0000",
                    "greedy_color": "#00FF00"
                },
                "line_width": 800.0,
                "column_width": 900.0,
                "height": 400.0,
                "n_y_ticks": 4
            }
        }"##;
        let config: BenchConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.prng_seed, None);
        assert_eq!(config.n_test_cases, 3);
        assert_eq!(config.chart_options.theme.exact_color, Color(0xFF, 0, 0));

        let default = serde_json::to_string(&BenchConfig::default()).unwrap();
        let parsed: BenchConfig = serde_json::from_str(&default).unwrap();
        assert_eq!(parsed, BenchConfig::default());
    }

    #[test]
    fn report_is_written_to_folder() {
        init_logger();
        let config = BenchConfig {
            n_test_cases: 5,
            generator: small_config(),
            ..BenchConfig::default()
        };
        let mut generator = generator(3, config.generator);
        let exact = harness::run(&ExactSolver::default(), &mut generator, 5, false).unwrap();
        let greedy = harness::run(&GreedySolver::default(), &mut generator, 5, true).unwrap();
        let output = BenchOutput::new(config, exact, greedy);

        let folder = temp_folder("report");
        io::write_report(&output, &folder).unwrap();

        for file in [
            io::RESULTS_FILE,
            "exact_line.svg",
            "exact_columns.svg",
            "greedy_line.svg",
            "greedy_columns.svg",
        ] {
            assert!(folder.join(file).exists(), "{file} missing");
        }
        let greedy_line = fs::read_to_string(folder.join("greedy_line.svg")).unwrap();
        assert!(greedy_line.contains("Greedy Algorithm Performance (Harder Cases)"));

        let written: BenchOutput = io::read_json(&folder.join(io::RESULTS_FILE)).unwrap();
        assert_eq!(written.exact.samples.len(), 5);
        assert_eq!(written.greedy.samples.len(), 5);
        assert!(written.greedy.harder_for_greedy);

        let _ = fs::remove_dir_all(&folder);
    }

    #[test]
    fn missing_config_file_is_an_error() {
        let result = io::read_json::<BenchConfig>(&temp_folder("missing").join("config.json"));
        assert!(result.is_err());
    }
}
