use argument_encoding::{
    encode, impl_arguments, Arguments, Command, CommandToken, Flag, Formatters, Opt, OptSet,
    Positional, Shape, Variant,
};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

struct Build {
    configuration: Opt<&'static str>,
    verbose: Flag,
    jobs: Opt<u32>,
    xcc: OptSet<String>,
}

impl_arguments! {
    #[formatters = Formatters::double_dash_kebab_case()]
    Build {
        configuration,
        verbose,
        jobs,
        xcc => "Xcc",
    }
}

struct Test {
    parallel: Flag,
    num_workers: Opt<u32>,
    filter: Opt<Option<String>>,
}

impl_arguments! {
    #[formatters = Formatters::double_dash_kebab_case()]
    Test {
        parallel,
        num_workers => "numWorkers",
        filter,
    }
}

enum SwiftCommand {
    Build(Build),
    Test(Test),
}

impl Arguments for SwiftCommand {
    fn shape(&self) -> Shape<'_> {
        match self {
            SwiftCommand::Build(build) => Variant::new("build").unnamed(build).into(),
            SwiftCommand::Test(test) => Variant::new("test").unnamed(test).into(),
        }
    }

    fn formatters(&self) -> Option<Formatters> {
        Some(Formatters::double_dash())
    }

    fn command(&self) -> CommandToken {
        CommandToken::Fixed(Command::from("swift"))
    }
}

fn build(defines: usize) -> SwiftCommand {
    SwiftCommand::Build(Build {
        configuration: Opt::new("release"),
        verbose: Flag::new(true),
        jobs: Opt::new(8),
        xcc: OptSet::new((0..defines).map(|i| format!("-DFLAG_{i}")).collect()),
    })
}

fn benchmark_encode_command(c: &mut Criterion) {
    let test = SwiftCommand::Test(Test {
        parallel: Flag::new(true),
        num_workers: Opt::new(4),
        filter: Opt::optional(Some("CoreTests".to_string())),
    });

    c.bench_function("encode_test_command", |b| b.iter(|| encode(black_box(&test))));
}

fn benchmark_encode_option_set(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode_option_set");

    for size in [10, 50, 100, 500].iter() {
        let command = build(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &command, |b, command| {
            b.iter(|| encode(black_box(command)))
        });
    }

    group.finish();
}

fn benchmark_encode_positionals(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode_positionals");

    for size in [10, 100, 1000].iter() {
        let paths: Vec<Positional<String>> = (0..*size)
            .map(|i| Positional::new(format!("Sources/File{i}.swift")))
            .collect();
        group.bench_with_input(BenchmarkId::from_parameter(size), &paths, |b, paths| {
            b.iter(|| encode(black_box(paths)))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_encode_command,
    benchmark_encode_option_set,
    benchmark_encode_positionals
);
criterion_main!(benches);
