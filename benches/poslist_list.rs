/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

#![cfg_attr(feature = "fatal-warnings", deny(warnings))]

use criterion::{Criterion, criterion_group, criterion_main};
use poslist::List;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::hint::black_box;

fn poslist_list_push_front(c: &mut Criterion) {
    let limit = 100_000;

    c.bench_function("poslist list push front", move |b| {
        b.iter(|| {
            let mut list: List<usize> = List::new();

            for i in 0..limit {
                list.push_front(i).unwrap();
            }

            list
        });
    });
}

fn poslist_list_push_back(c: &mut Criterion) {
    let limit = 100_000;

    c.bench_function("poslist list push back", move |b| {
        b.iter(|| {
            let mut list: List<usize> = List::new();

            for i in 0..limit {
                list.push_back(i).unwrap();
            }

            list
        });
    });
}

fn poslist_list_insert_middle(c: &mut Criterion) {
    let limit = 2_000;

    c.bench_function("poslist list insert middle", move |b| {
        b.iter(|| {
            let mut list: List<usize> = List::new();

            for i in 0..limit {
                list.insert(list.len() / 2, i).unwrap();
            }

            list
        });
    });
}

fn poslist_list_insert_random(c: &mut Criterion) {
    let limit = 2_000;

    c.bench_function("poslist list insert random", move |b| {
        b.iter_with_setup(
            || {
                let mut rng = StdRng::seed_from_u64(limit as u64);

                (0..limit).map(|i| rng.gen_range(0..=i)).collect::<Vec<usize>>()
            },
            |positions| {
                let mut list: List<usize> = List::new();

                for (i, position) in positions.into_iter().enumerate() {
                    list.insert(position, i).unwrap();
                }

                list
            },
        );
    });
}

fn poslist_list_get(c: &mut Criterion) {
    let limit = 2_000;
    let list: List<usize> = (0..limit).collect();

    c.bench_function("poslist list get", move |b| {
        b.iter(|| {
            for i in 0..limit {
                black_box(list.get(i));
            }
        });
    });
}

#[allow(clippy::explicit_iter_loop)]
fn poslist_list_iterate(c: &mut Criterion) {
    let limit = 100_000;
    let mut list = List::new();

    for i in 0..limit {
        list.push_front(i).unwrap();
    }

    c.bench_function("poslist list iterate", move |b| {
        b.iter(|| {
            for i in list.iter() {
                black_box(i);
            }
        });
    });
}

criterion_group!(
    benches,
    poslist_list_push_front,
    poslist_list_push_back,
    poslist_list_insert_middle,
    poslist_list_insert_random,
    poslist_list_get,
    poslist_list_iterate
);
criterion_main!(benches);
