use argument_encoding::{encode, encode_with_formatters, impl_arguments, Flag, Formatters, Opt};
use std::thread;

struct Build {
    dry_run: Flag,
    num_jobs: Opt<u32>,
}

impl_arguments! {
    Build {
        dry_run => "dryRun",
        num_jobs => "numJobs",
    }
}

struct Scoped {
    build: Build,
}

impl_arguments! {
    #[formatters = Formatters::single_dash()]
    Scoped { build }
}

fn build(jobs: u32) -> Build {
    Build {
        dry_run: Flag::new(true),
        num_jobs: Opt::new(jobs),
    }
}

#[test]
fn test_concurrent_encodes_do_not_share_context() {
    let presets: Vec<(Formatters, &str, &str)> = vec![
        (Formatters::single_dash(), "-dryRun", "-numJobs"),
        (Formatters::double_dash(), "--dryRun", "--numJobs"),
        (Formatters::double_dash_kebab_case(), "--dry-run", "--num-jobs"),
    ];

    thread::scope(|scope| {
        let handles: Vec<_> = presets
            .iter()
            .enumerate()
            .map(|(index, (formatters, flag, option))| {
                scope.spawn(move || {
                    for jobs in 0..200u32 {
                        let jobs = jobs + index as u32;
                        let tokens =
                            encode_with_formatters(&build(jobs), formatters.clone()).unwrap();
                        assert_eq!(
                            tokens,
                            vec![flag.to_string(), option.to_string(), jobs.to_string()]
                        );
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }
    });
}

#[test]
fn test_shared_tree_encodes_identically_on_every_thread() {
    let scoped = Scoped { build: build(4) };
    let expected = encode(&scoped).unwrap();
    assert_eq!(expected, vec!["-dryRun", "-numJobs", "4"]);

    thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| (0..100).map(|_| encode(&scoped).unwrap()).collect::<Vec<_>>()))
            .collect();

        for handle in handles {
            for tokens in handle.join().unwrap() {
                assert_eq!(tokens, expected);
            }
        }
    });
}
