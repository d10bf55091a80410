use clap::Parser;

use super::BenchArgs;

pub(crate) fn parse_test_args<I, T>(args: I) -> Result<BenchArgs, String>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    BenchArgs::try_parse_from(args).map_err(|err| err.to_string())
}
