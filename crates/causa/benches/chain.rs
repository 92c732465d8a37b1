#![allow(missing_docs)]
use std::error::Error;
use std::fmt;

use causa::{
    ChainError, ErrorInfo, TextError, WrapExt, cause, errorf, get_all_error_info, get_error_info,
    get_original_error_info, get_stack_cause, new, with_error_info, with_message, with_messagef,
    wrap,
};
use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

#[derive(Debug)]
struct Code(u16);

impl ErrorInfo for Code {
    fn when_error(
        &self,
        cause: Option<&(dyn Error + 'static)>,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match cause {
            Some(cause) => write!(f, "{cause}"),
            None => write!(f, "{}", self.0),
        }
    }
}

fn deep_chain(depth: usize) -> ChainError {
    let mut err = with_error_info(new("root"), Code(0));
    for i in 0..depth {
        err = if i % 4 == 0 {
            with_error_info(err, Code(i as u16))
        } else {
            with_message(err, "layer")
        };
    }
    err
}

pub fn construct_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("construct");

    // Baseline: a leaf error without any stack capture
    group.bench_function("text_error", |b| {
        b.iter(|| black_box(TextError::new(black_box("foo"))))
    });

    group.bench_function("new", |b| b.iter(|| black_box(new(black_box("foo")))));

    group.bench_function("errorf", |b| {
        b.iter(|| black_box(errorf!("{}-{}", black_box("x"), black_box(1))))
    });

    // Wrapping a leaf pays for the stack capture
    group.bench_function("wrap", |b| {
        b.iter(|| black_box(wrap(TextError::new("foo"))))
    });

    group.bench_function("with_message_capture", |b| {
        b.iter(|| black_box(with_message(TextError::new("foo"), "bar")))
    });

    // Wrapping a chain node shares the existing stack
    group.bench_function("with_message_reuse", |b| {
        b.iter_batched(
            || new("foo"),
            |err| black_box(with_message(err, "bar")),
            criterion::BatchSize::SmallInput,
        )
    });

    group.bench_function("with_messagef", |b| {
        b.iter_batched(
            || new("foo"),
            |err| black_box(with_messagef!(err, "bar {}", 1)),
            criterion::BatchSize::SmallInput,
        )
    });

    group.bench_function("multi_with_message", |b| {
        b.iter(|| {
            let err = with_message(TextError::new("foo"), "bar");
            let err = with_message(err, "baz");
            black_box(with_message(err, "qux"))
        })
    });

    group.bench_function("multi_wrap", |b| {
        b.iter(|| black_box(wrap(wrap(wrap(TextError::new("foo"))))))
    });

    group.bench_function("result_ext_ok", |b| {
        b.iter(|| black_box(Ok::<u8, TextError>(black_box(1)).with_message("unused")))
    });

    group.finish();
}

pub fn traverse_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("traverse");

    for depth in [1usize, 8, 64].iter() {
        let err = deep_chain(*depth);

        group.bench_with_input(BenchmarkId::new("cause", depth), &err, |b, err| {
            b.iter(|| black_box(cause(err)))
        });

        group.bench_with_input(BenchmarkId::new("get_error_info", depth), &err, |b, err| {
            b.iter(|| black_box(get_error_info::<Code>(err)))
        });

        group.bench_with_input(
            BenchmarkId::new("get_all_error_info", depth),
            &err,
            |b, err| b.iter(|| black_box(get_all_error_info::<Code>(err))),
        );

        group.bench_with_input(
            BenchmarkId::new("get_original_error_info", depth),
            &err,
            |b, err| b.iter(|| black_box(get_original_error_info::<Code>(err))),
        );

        group.bench_with_input(BenchmarkId::new("to_string", depth), &err, |b, err| {
            b.iter(|| black_box(err.to_string()))
        });
    }

    // Symbol resolution dominates here
    let err = deep_chain(1);
    group.bench_function("stack_cause_resolve", |b| {
        b.iter(|| {
            let frame = get_stack_cause(&err);
            black_box(frame.map(|frame| frame.to_text()))
        })
    });

    group.finish();
}

criterion_group!(benches, construct_benchmarks, traverse_benchmarks);
criterion_main!(benches);
