use chrono::{DateTime, Duration, Utc};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use meeus_sun::time::JulianDate;
use meeus_sun::{GeographicLocation, meeus};
use std::hint::black_box;

fn san_francisco() -> GeographicLocation {
    GeographicLocation::new(37.7749, -122.4194).unwrap()
}

fn benchmark_single_calculation(c: &mut Criterion) {
    let datetime = "2023-06-21T12:00:00Z".parse::<DateTime<Utc>>().unwrap();
    let location = san_francisco();

    c.bench_function("meeus_single", |b| {
        b.iter(|| meeus::solar_position_at(black_box(datetime), black_box(Some(location))).unwrap())
    });

    c.bench_function("meeus_single_without_location", |b| {
        b.iter(|| meeus::solar_position_at(black_box(datetime), black_box(None)).unwrap())
    });
}

fn benchmark_time_series_fixed_location(c: &mut Criterion) {
    let mut group = c.benchmark_group("time_series_fixed_location");

    let base_datetime = "2023-06-21T00:00:00Z".parse::<DateTime<Utc>>().unwrap();
    let location = san_francisco();

    for &count in &[1000, 5000, 25000] {
        group.throughput(Throughput::Elements(count));

        let datetimes: Vec<DateTime<Utc>> = (0..count)
            .map(|i| base_datetime + Duration::hours(i as i64))
            .collect();

        group.bench_with_input(BenchmarkId::new("meeus", count), &count, |b, _| {
            b.iter(|| {
                for &dt in &datetimes {
                    let _result =
                        meeus::solar_position_at(black_box(dt), black_box(Some(location))).unwrap();
                }
            })
        });
    }

    group.finish();
}

fn benchmark_coordinate_sweep_fixed_time(c: &mut Criterion) {
    let mut group = c.benchmark_group("coordinate_sweep_fixed_time");

    let datetime = "2023-06-21T12:00:00Z".parse::<DateTime<Utc>>().unwrap();
    let jd = JulianDate::from_datetime(&datetime).unwrap();

    for &grid_size in &[30, 70, 150] {
        // 30x30, 70x70, 150x150 grids (~1K, 5K, 22K calculations)
        let count = grid_size * grid_size;
        group.throughput(Throughput::Elements(count as u64));

        let locations: Vec<GeographicLocation> = (0..grid_size)
            .flat_map(|i| {
                (0..grid_size).map(move |j| {
                    let lat = 30.0 + (i as f64) * 0.1; // 30° to 45° latitude
                    let lon = -120.0 + (j as f64) * 0.1; // -120° to -105° longitude
                    GeographicLocation::new(lat, lon).unwrap()
                })
            })
            .collect();

        group.bench_with_input(
            BenchmarkId::new("combined", format!("{grid_size}x{grid_size}")),
            &count,
            |b, _| {
                b.iter(|| {
                    for &location in &locations {
                        let _result =
                            meeus::solar_position_from_julian(black_box(jd), Some(location))
                                .unwrap();
                    }
                })
            },
        );

        group.bench_with_input(
            BenchmarkId::new("split", format!("{grid_size}x{grid_size}")),
            &count,
            |b, _| {
                b.iter(|| {
                    let sun = meeus::apparent_sun(black_box(&jd)).unwrap();
                    for location in &locations {
                        let _result = sun.horizontal(black_box(location)).unwrap();
                    }
                })
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_single_calculation,
    benchmark_time_series_fixed_location,
    benchmark_coordinate_sweep_fixed_time
);
criterion_main!(benches);
