//! Command handlers for the `hopfinder` binary.

use std::path::Path;

use anyhow::Context;
use colored::Colorize;
use serde::Serialize;
use serde_json::{Map, Value};

use hopfinder_core::graph::loader;
use hopfinder_core::{
    admit_all, unweighted_route, uniform_weight, weighted_route, Algorithm, Cost, Graph,
    HopfinderConfig, NodeId, Route, RouteConstraints,
};

use crate::{OutputFormat, RouteArgs};

/// Node payload as loaded from the graph file: every field except
/// `id` and `connections`.
type Payload = Map<String, Value>;

/// JSON shape of a successful `route` command.
#[derive(Serialize)]
struct RouteReport<'a> {
    from: NodeId,
    to: NodeId,
    algorithm: Algorithm,
    hops: usize,
    #[serde(flatten)]
    route: &'a Route,
}

/// JSON shape of the `stats` command.
#[derive(Serialize)]
struct StatsReport {
    nodes: usize,
    edges: usize,
    dangling: Vec<(NodeId, NodeId)>,
}

fn load_graph(config: &HopfinderConfig, path: &Path) -> anyhow::Result<Graph<Payload>> {
    loader::from_json_file(path, config.graph.capacity_hint)
        .with_context(|| format!("failed to load graph from {}", path.display()))
}

/// Configured avoidance lists extended with the command-line ones.
fn merged_constraints(config: &HopfinderConfig, args: &RouteArgs) -> RouteConstraints {
    let mut constraints = config.routing.constraints.clone();
    constraints.avoid.extend(args.avoid.iter().copied());
    constraints.avoid_edges.extend(args.avoid_edges.iter().copied());
    constraints
}

/// Cost of entering `candidate`: its numeric `field`, or 1.0 when absent.
fn field_cost(graph: &Graph<Payload>, field: &str, candidate: NodeId) -> Cost {
    graph
        .payload(candidate)
        .and_then(|payload| payload.get(field))
        .and_then(Value::as_f64)
        .unwrap_or(1.0)
}

pub(crate) fn route(config: &HopfinderConfig, args: &RouteArgs) -> anyhow::Result<()> {
    let graph = load_graph(config, &args.graph)?;
    let algorithm = args.algorithm.unwrap_or(config.routing.algorithm);
    let constraints = merged_constraints(config, args);

    tracing::debug!(
        from = args.from,
        to = args.to,
        %algorithm,
        avoid = constraints.avoid.len(),
        avoid_edges = constraints.avoid_edges.len(),
        "Routing"
    );

    let route = match algorithm {
        Algorithm::Fast => {
            if !constraints.avoid_edges.is_empty() {
                tracing::warn!("Avoided edges are only honoured by the weighted solver");
            }
            if args.cost_field.is_some() {
                tracing::warn!("--cost-field is ignored by the fast solver");
            }
            let admit = constraints.admit(admit_all::<Graph<Payload>>);
            unweighted_route(&graph, args.from, args.to, admit)?
        }
        Algorithm::Weighted => match args.cost_field.as_deref() {
            Some(field) => weighted_route(
                &graph,
                args.from,
                args.to,
                constraints.guard(|g: &Graph<Payload>, _, _, candidate| {
                    Ok(field_cost(g, field, candidate))
                }),
            )?,
            None => {
                let weight = constraints.guard(uniform_weight::<Graph<Payload>>);
                weighted_route(&graph, args.from, args.to, weight)?
            }
        },
    };

    match args.format {
        OutputFormat::Json => {
            let report = RouteReport {
                from: args.from,
                to: args.to,
                algorithm,
                hops: route.hops(),
                route: &route,
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Text => print_route(&graph, &route),
    }
    Ok(())
}

fn print_route(graph: &Graph<Payload>, route: &Route) {
    let steps: Vec<String> = route
        .nodes
        .iter()
        .map(|&id| {
            match graph.payload(id).and_then(|payload| payload.get("name")).and_then(Value::as_str) {
                Some(name) => format!("{id} ({name})"),
                None => id.to_string(),
            }
        })
        .collect();

    println!("{}", steps.join(" -> "));
    println!("{} {}, {} {}", "hops:".bold(), route.hops(), "cost:".bold(), route.cost);
}

pub(crate) fn stats(config: &HopfinderConfig, path: &Path, format: OutputFormat) -> anyhow::Result<()> {
    let graph = load_graph(config, path)?;
    let report = StatsReport {
        nodes: graph.node_count(),
        edges: graph.edge_count(),
        dangling: graph.dangling_references(),
    };

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Text => {
            println!("{}", "Graph:".bold());
            println!("  nodes:    {}", report.nodes);
            println!("  edges:    {}", report.edges);
            println!("  dangling: {}", report.dangling.len());
            for (from, to) in &report.dangling {
                println!("    {from} -> {to}");
            }
        }
    }
    Ok(())
}
