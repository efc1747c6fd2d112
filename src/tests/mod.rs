mod utils;

mod runner_tests;
