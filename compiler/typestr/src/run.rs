//! Running descriptors through a pool.

use std::collections::BTreeSet;

use rayon::prelude::*;
use tracing::debug;
use typestr_parse::{ContainedTypes, TypeParser};
use typestr_types::Pool;

use crate::{render_error, CliOptions};

/// What a run produced, in input order.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Report {
    /// Canonical form of each descriptor, or its rendered error.
    pub results: Vec<Result<String, String>>,
    /// Sorted contained-type names, when requested.
    pub contained: Option<Vec<String>>,
}

impl Report {
    pub fn success(&self) -> bool {
        self.results.iter().all(Result::is_ok)
    }
}

/// Parse `sources` as `options` say.
///
/// In batch mode one parser sees every descriptor in order and the run
/// stops at the first failure. Otherwise each descriptor gets its own
/// pool and parser, so they can run in parallel.
pub fn run<S: AsRef<str> + Sync>(options: &CliOptions, sources: &[S]) -> Report {
    debug!(
        count = sources.len(),
        batch = options.batch,
        parallel = options.parallel,
        "running descriptors"
    );
    if options.batch {
        run_batch(options, sources)
    } else {
        run_each(options, sources)
    }
}

fn run_batch<S: AsRef<str>>(options: &CliOptions, sources: &[S]) -> Report {
    let mut pool = Pool::new();
    let mut parser = TypeParser::with_config(&mut pool, options.config);
    let result = parser.parse_list_expecting(sources, options.expect);
    let (_, contained) = parser.into_parts();

    let results = match result {
        Ok(types) => types.into_iter().map(|ty| Ok(pool.format_type(ty))).collect(),
        Err(err) => {
            let source = sources.get(err.index).map_or("", |s| s.as_ref());
            vec![Err(format!(
                "descriptor #{}: {}",
                err.index,
                render_error(source, &err.error)
            ))]
        }
    };
    Report {
        results,
        contained: options.contained.then(|| sorted(contained.iter())),
    }
}

fn run_each<S: AsRef<str> + Sync>(options: &CliOptions, sources: &[S]) -> Report {
    let parse_one = |source: &S| -> (Result<String, String>, ContainedTypes) {
        let source = source.as_ref();
        let mut pool = Pool::new();
        let mut parser = TypeParser::with_config(&mut pool, options.config);
        let result = parser.parse_expecting(source, options.expect);
        let (_, contained) = parser.into_parts();
        let result = result
            .map(|ty| pool.format_type(ty))
            .map_err(|err| render_error(source, &err));
        (result, contained)
    };

    let outcomes: Vec<_> = if options.parallel {
        sources.par_iter().map(parse_one).collect()
    } else {
        sources.iter().map(parse_one).collect()
    };

    let contained = options.contained.then(|| {
        sorted(outcomes.iter().flat_map(|(_, contained)| contained.iter()))
    });
    Report {
        results: outcomes.into_iter().map(|(result, _)| result).collect(),
        contained,
    }
}

fn sorted<'a>(names: impl Iterator<Item = &'a str>) -> Vec<String> {
    names
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_owned)
        .collect()
}
