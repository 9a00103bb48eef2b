use crate::stats::{Histogram, Summary, mean, population_std_dev};

#[test]
fn mean_and_population_std_dev_on_known_values() {
    let samples = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
    assert_eq!(mean(&samples), Some(5.0));
    assert_eq!(population_std_dev(&samples), Some(2.0));
}

#[test]
fn empty_samples_have_no_statistics() {
    assert_eq!(mean(&[]), None);
    assert_eq!(population_std_dev(&[]), None);
    assert!(Histogram::new(&[], 20).is_none());
    assert!(Summary::new(&[], 20).is_none());
}

#[test]
fn histogram_spans_observed_min_max() {
    let samples = [0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0];
    let hist = Histogram::new(&samples, 5).expect("histogram");
    assert_eq!(hist.min, 0.0);
    assert_eq!(hist.max, 10.0);
    assert_eq!(hist.counts.iter().sum::<u64>(), samples.len() as u64);
    // 最大值落入最后一个（右闭）箱。
    assert_eq!(hist.counts, vec![2, 2, 2, 2, 3]);
    assert_eq!(hist.bin_start(0), 0.0);
    assert_eq!(hist.bin_start(4), 8.0);
}

#[test]
fn zero_bins_is_rejected() {
    assert!(Histogram::new(&[1.0, 2.0], 0).is_none());
}

#[test]
fn identical_samples_fall_into_one_bin() {
    let hist = Histogram::new(&[5.0, 5.0, 5.0], 4).expect("histogram");
    assert_eq!(hist.counts, vec![3, 0, 0, 0]);
}

#[test]
fn summary_combines_mean_std_and_histogram() {
    let samples = [1.0, 2.0, 3.0, 4.0];
    let summary = Summary::new(&samples, 2).expect("summary");
    assert_eq!(summary.replications, 4);
    assert_eq!(summary.mean, 2.5);
    assert_eq!(summary.histogram.counts, vec![2, 2]);
}
