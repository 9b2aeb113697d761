//! Benchmark for the burin checker.

use burin::Linter;
use burin_maquette::{
    ArgumentNode, AttributeNode, DirectiveKeyNode, Position, PropNode, SourceLocation,
};
use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

fn span(start: u32, len: u32, text: &str) -> SourceLocation {
    SourceLocation::new(
        Position::new(start, 1, start + 1),
        Position::new(start + len, 1, start + len + 1),
        text,
    )
}

fn small_document() -> (String, Vec<PropNode>) {
    let source = r#"<custom data-id="foo" myProp="bar" :otherProp="baz" v-bind:thirdProp="qux"/>"#.to_string();
    let props = vec![
        PropNode::Attribute(AttributeNode::new("data-id", span(8, 7, "data-id"))),
        PropNode::Attribute(AttributeNode::new("myProp", span(22, 6, "myProp"))),
        PropNode::Directive({
            let mut dir = DirectiveKeyNode::new("bind", ":otherProp", span(35, 10, ":otherProp"));
            dir.arg = Some(ArgumentNode::new("otherProp", false, span(36, 9, "otherProp")));
            dir
        }),
        PropNode::Directive({
            let mut dir =
                DirectiveKeyNode::new("bind", "v-bind:thirdProp", span(52, 16, "v-bind:thirdProp"));
            dir.arg = Some(ArgumentNode::new("thirdProp", false, span(59, 9, "thirdProp")));
            dir
        }),
    ];
    (source, props)
}

fn large_document() -> (String, Vec<PropNode>) {
    let mut source = String::from("<custom");
    let mut props = Vec::with_capacity(200);
    for i in 0..200 {
        let name = format!("longPropName{i}");
        let start = source.len() + 1;
        source.push_str(&format!(" {name}=\"value\""));
        let loc = span(start as u32, name.len() as u32, &name);
        props.push(PropNode::Attribute(AttributeNode::new(name, loc)));
    }
    source.push_str("/>");
    (source, props)
}

fn bench_lint_small(c: &mut Criterion) {
    let (source, props) = small_document();
    let linter = Linter::new();

    let mut group = c.benchmark_group("lint");
    group.throughput(Throughput::Bytes(source.len() as u64));
    group.bench_function("lint_small", |b| {
        b.iter(|| linter.lint_props(black_box(&props), black_box(&source), "bench.html"))
    });
    group.finish();
}

fn bench_lint_large(c: &mut Criterion) {
    let (source, props) = large_document();
    let linter = Linter::new();

    let mut group = c.benchmark_group("lint");
    group.throughput(Throughput::Bytes(source.len() as u64));
    group.bench_function("lint_large", |b| {
        b.iter(|| linter.lint_props(black_box(&props), black_box(&source), "bench.html"))
    });
    group.finish();
}

criterion_group!(benches, bench_lint_small, bench_lint_large);
criterion_main!(benches);
