use std::io::Write;

use sophia::api::MownStr;
use sophia::api::ns::rdf;
use sophia::api::prefix::Prefix;
use sophia::api::prelude::*;
use sophia::api::term::SimpleTerm;
use sophia::inmem::graph::LightGraph;
use sophia::iri::{Iri, IriRef};
use sophia::turtle::serializer::turtle::{
    TurtleConfig, TurtleSerializer,
};

use crate::mapper::MappedRow;
use crate::prelude::*;
use crate::record::{DistributionKind, Frequency};
use crate::vocab::{DCAT, DCT, XSD};

/// The two graph shapes the assembler can emit. The DCAT view is a
/// strict superset of the Dublin Core view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum View {
    DublinCore,
    Dcat,
}

/// Folds mapped rows into an RDF graph. Absent fields emit no
/// triple; dates stay plain literals so parsed and raw fallback
/// values serialize uniformly. `dcat:byteSize` is the only typed
/// literal.
pub(crate) fn assemble(
    records: &[MappedRow],
    view: View,
    vocab: &Vocabulary,
) -> LightGraph {
    let mut g = LightGraph::new();

    for (dataset, distributions) in records {
        let s = iri(&dataset.dataset_uri);

        if view == View::Dcat {
            insert(
                &mut g,
                &s,
                rdf::type_,
                vocab.dcat.get_unchecked("Dataset"),
            );
        }

        if let Some(ref title) = dataset.title {
            insert(
                &mut g,
                &s,
                vocab.dct.get_unchecked("title"),
                title.as_str(),
            );
        }

        if let Some(ref description) = dataset.description {
            insert(
                &mut g,
                &s,
                vocab.dct.get_unchecked("description"),
                description.as_str(),
            );
        }

        for (predicate, date) in [
            ("issued", &dataset.issued),
            ("modified", &dataset.modified),
            ("created", &dataset.created),
        ] {
            if let Some(date) = date {
                insert(
                    &mut g,
                    &s,
                    vocab.dct.get_unchecked(predicate),
                    date.to_string().as_str(),
                );
            }
        }

        if let Some(ref publisher) = dataset.publisher {
            insert(
                &mut g,
                &s,
                vocab.dct.get_unchecked("publisher"),
                publisher.as_str(),
            );
        }

        match dataset.accrual_periodicity {
            Some(Frequency::Uri(ref uri)) => insert(
                &mut g,
                &s,
                vocab.dct.get_unchecked("accrualPeriodicity"),
                iri(uri),
            ),
            Some(Frequency::Raw(ref raw)) => insert(
                &mut g,
                &s,
                vocab.dct.get_unchecked("accrualPeriodicity"),
                raw.as_str(),
            ),
            None => {}
        }

        for subject in &dataset.subjects {
            insert(
                &mut g,
                &s,
                vocab.dct.get_unchecked("subject"),
                subject.as_str(),
            );

            if view == View::Dcat {
                insert(
                    &mut g,
                    &s,
                    vocab.dcat.get_unchecked("theme"),
                    subject.as_str(),
                );
            }
        }

        if let Some(ref landing_page) = dataset.landing_page {
            insert(
                &mut g,
                &s,
                vocab.dcat.get_unchecked("landingPage"),
                iri(landing_page),
            );
        }

        if view == View::Dcat {
            for distribution in distributions {
                let d = iri(&distribution.distribution_uri);

                insert(
                    &mut g,
                    &d,
                    rdf::type_,
                    vocab.dcat.get_unchecked("Distribution"),
                );
                insert(
                    &mut g,
                    &s,
                    vocab.dcat.get_unchecked("distribution"),
                    &d,
                );

                let url_predicate = match distribution.kind {
                    DistributionKind::Api => "accessURL",
                    DistributionKind::File => "downloadURL",
                };
                insert(
                    &mut g,
                    &d,
                    vocab.dcat.get_unchecked(url_predicate),
                    iri(&distribution.url),
                );

                if let Some(ref format) = distribution.format {
                    insert(
                        &mut g,
                        &d,
                        vocab.dct.get_unchecked("format"),
                        format.as_str(),
                    );
                    insert(
                        &mut g,
                        &d,
                        vocab.dcat.get_unchecked("mediaType"),
                        format.as_str(),
                    );
                }

                if let Some(size) = distribution.byte_size {
                    insert(
                        &mut g,
                        &d,
                        vocab.dcat.get_unchecked("byteSize"),
                        integer_literal(size),
                    );
                }
            }
        }
    }

    g
}

/// Serializes a graph as Turtle with the fixed prefix bindings.
pub(crate) fn write_turtle<W: Write>(
    graph: &LightGraph,
    write: W,
) -> NicmetaResult<()> {
    let config = TurtleConfig::new()
        .with_pretty(true)
        .with_own_prefix_map(prefixes());

    let mut serializer =
        TurtleSerializer::new_with_config(write, config);
    serializer
        .serialize_graph(graph)
        .map_err(NicmetaError::other)?;

    Ok(())
}

fn prefixes() -> Vec<(Prefix<Box<str>>, Iri<Box<str>>)> {
    vec![
        (
            Prefix::new_unchecked("dct".into()),
            Iri::new_unchecked(DCT.into()),
        ),
        (
            Prefix::new_unchecked("dcat".into()),
            Iri::new_unchecked(DCAT.into()),
        ),
        (
            Prefix::new_unchecked("xsd".into()),
            Iri::new_unchecked(XSD.into()),
        ),
    ]
}

/// A runtime IRI term. Deliberately unchecked: identifiers derived
/// from malformed aliases or URLs propagate as-is.
fn iri(value: &str) -> SimpleTerm<'_> {
    SimpleTerm::Iri(IriRef::new_unchecked(MownStr::from(value)))
}

fn integer_literal(value: i64) -> SimpleTerm<'static> {
    SimpleTerm::LiteralDatatype(
        value.to_string().into(),
        IriRef::new_unchecked(format!("{XSD}integer").into()),
    )
}

fn insert<S, P, O>(g: &mut LightGraph, s: S, p: P, o: O)
where
    S: Term,
    P: Term,
    O: Term,
{
    // the term index only fails once u32::MAX terms are interned
    g.insert(s, p, o).expect("graph insert");
}
