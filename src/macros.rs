/// Implements [`Arguments`](crate::Arguments) for a struct whose fields are
/// visited in the listed order.
///
/// Each field is keyed by its name, or by the string after `=>`. Optional
/// `#[formatters = ...]` and `#[command = ...]` headers declare the
/// struct's formatters and [`CommandToken`](crate::CommandToken).
///
/// # Examples
///
/// ```rust
/// use argument_encoding::{impl_arguments, Arguments, Command, CommandToken, Flag, Formatters, Opt};
///
/// struct Test {
///     parallel: Flag,
///     num_workers: Opt<u32>,
/// }
///
/// impl_arguments! {
///     #[formatters = Formatters::double_dash_kebab_case()]
///     #[command = CommandToken::Fixed(Command::from("test"))]
///     Test {
///         parallel,
///         num_workers => "numWorkers",
///     }
/// }
///
/// let test = Test { parallel: Flag::new(true), num_workers: Opt::new(4) };
/// assert_eq!(test.arguments().unwrap(), vec!["test", "--parallel", "--num-workers", "4"]);
/// ```
#[macro_export]
macro_rules! impl_arguments {
    (@key $field:ident) => {
        stringify!($field)
    };
    (@key $field:ident $key:literal) => {
        $key
    };
    (
        $(#[formatters = $formatters:expr])?
        $(#[command = $command:expr])?
        $ty:ty {
            $($field:ident $(=> $key:literal)?),* $(,)?
        }
    ) => {
        impl $crate::Arguments for $ty {
            fn shape(&self) -> $crate::Shape<'_> {
                $crate::Record::new()
                    $(.field(
                        $crate::impl_arguments!(@key $field $($key)?),
                        &self.$field,
                    ))*
                    .into()
            }

            $(
                fn formatters(&self) -> ::std::option::Option<$crate::Formatters> {
                    ::std::option::Option::Some($formatters)
                }
            )?

            $(
                fn command(&self) -> $crate::CommandToken {
                    $command
                }
            )?
        }
    };
}
