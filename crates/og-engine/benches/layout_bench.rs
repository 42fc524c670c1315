use criterion::{black_box, criterion_group, criterion_main, Criterion};
use og_engine::{compute_layout, route_all};
use og_ir::{parse_algorithm, parse_feedback, GraphModel, Mode};

fn dense_model(mode: Mode) -> GraphModel {
    let algorithm = parse_algorithm("c2: 3>1 4>1 5>2 6>2 4>3 6>5").unwrap();
    let feedback = parse_feedback("1>1 2>2 3>3 6>1 5>4").unwrap();
    GraphModel::from_instrument(&algorithm, &feedback, mode)
}

fn bench_layout(c: &mut Criterion) {
    let model = dense_model(Mode::Algorithm);
    c.bench_function("compute_layout", |b| b.iter(|| compute_layout(black_box(&model))));
}

fn bench_redraw_pass(c: &mut Criterion) {
    for mode in [Mode::Algorithm, Mode::Feedback] {
        let model = dense_model(mode);
        c.bench_function(&format!("layout_and_route_{}", mode.label()), |b| {
            b.iter(|| {
                let placement = compute_layout(black_box(&model));
                route_all(&model, &placement)
            })
        });
    }
}

criterion_group!(benches, bench_layout, bench_redraw_pass);
criterion_main!(benches);
