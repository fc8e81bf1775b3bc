use caddygen_core::{Block, Children, Directive};
use criterion::{Criterion, black_box, criterion_group, criterion_main};

fn build_tree(sites: usize) -> Block {
    let mut root = Block::new();
    root.get_or_create_directive("", "options")
        .get_or_create_directive("email", "")
        .add_args(["ops@example.com"]);

    for i in (0..sites).rev() {
        let host = format!("site{i}.example.com");
        let site = root.get_or_create_directive("site", &host);
        site.add_args([host.as_str()]);
        site.get_or_create_directive("encode", "").add_args(["zstd", "gzip"]);
        for path in ["/api/*", "/static/*", "/ws/*"] {
            let handle = site.get_or_create_directive("handle", path);
            handle.add_args([path]);
            handle
                .add_directive(Directive::new("reverse_proxy", ""))
                .add_args([format!("localhost:{}", 9000 + i)]);
        }
    }
    root
}

fn bench_marshal(c: &mut Criterion) {
    c.bench_function("marshal_100_sites", |b| {
        b.iter_with_setup(|| build_tree(100), |mut root| black_box(root.marshal()))
    });

    let mut sorted = build_tree(100);
    sorted.marshal();
    c.bench_function("remarshal_sorted_100_sites", |b| {
        b.iter(|| black_box(sorted.marshal()))
    });
}

criterion_group!(benches, bench_marshal);
criterion_main!(benches);
