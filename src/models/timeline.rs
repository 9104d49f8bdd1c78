//! Timeline (Gantt chart) model.
//!
//! A timeline is the solution a simulation produces: an ordered
//! sequence of execution segments covering `[0, makespan)` with no
//! overlaps. Segments either hold a process or mark the CPU idle.
//!
//! Raw segment sequences coming out of a discipline are normalized
//! here: zero-length segments are dropped and time-adjacent segments
//! of the same occupant are merged.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3

use serde::{Deserialize, Serialize};

/// What occupies the CPU during a segment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SegmentOccupant {
    /// A process identified by pid.
    Process(String),
    /// No process is eligible to run.
    Idle,
}

/// A half-open interval `[start, end)` of the execution timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GanttSegment {
    /// Who holds the CPU during this interval.
    pub occupant: SegmentOccupant,
    /// Interval start (units).
    pub start: i64,
    /// Interval end (units, > start after normalization).
    pub end: i64,
}

impl GanttSegment {
    /// Creates a segment for a running process.
    pub fn process(pid: impl Into<String>, start: i64, end: i64) -> Self {
        Self {
            occupant: SegmentOccupant::Process(pid.into()),
            start,
            end,
        }
    }

    /// Creates an idle segment.
    pub fn idle(start: i64, end: i64) -> Self {
        Self {
            occupant: SegmentOccupant::Idle,
            start,
            end,
        }
    }

    /// Segment duration (end - start) in units.
    #[inline]
    pub fn duration(&self) -> i64 {
        self.end - self.start
    }

    /// Whether this segment marks idle CPU time.
    #[inline]
    pub fn is_idle(&self) -> bool {
        self.occupant == SegmentOccupant::Idle
    }

    /// The running pid, or `None` for idle segments.
    pub fn pid(&self) -> Option<&str> {
        match &self.occupant {
            SegmentOccupant::Process(pid) => Some(pid),
            SegmentOccupant::Idle => None,
        }
    }
}

/// A complete, normalized execution timeline.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeline {
    /// Segments in execution order.
    pub segments: Vec<GanttSegment>,
}

impl Timeline {
    /// Creates an empty timeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a timeline from a raw segment sequence, normalizing it.
    ///
    /// Normalization is a single left-to-right pass that drops any
    /// segment with `end <= start` and merges a segment into its
    /// predecessor when both share the same occupant and the
    /// predecessor's `end` equals the segment's `start`. The pass is
    /// idempotent.
    pub fn from_raw(raw: Vec<GanttSegment>) -> Self {
        let mut segments: Vec<GanttSegment> = Vec::with_capacity(raw.len());

        for segment in raw {
            if segment.end <= segment.start {
                continue;
            }
            match segments.last_mut() {
                Some(prev) if prev.occupant == segment.occupant && prev.end == segment.start => {
                    prev.end = segment.end;
                }
                _ => segments.push(segment),
            }
        }

        Self { segments }
    }

    /// Makespan: end time of the last segment (units).
    pub fn makespan(&self) -> i64 {
        self.segments.last().map(|s| s.end).unwrap_or(0)
    }

    /// Number of segments.
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    /// Returns all segments belonging to a given pid.
    pub fn segments_for(&self, pid: &str) -> Vec<&GanttSegment> {
        self.segments
            .iter()
            .filter(|s| s.pid() == Some(pid))
            .collect()
    }

    /// Completion time for a pid: latest end among its segments.
    ///
    /// Returns `None` if the pid never appears on the timeline.
    pub fn completion_time(&self, pid: &str) -> Option<i64> {
        self.segments
            .iter()
            .filter(|s| s.pid() == Some(pid))
            .map(|s| s.end)
            .max()
    }

    /// Total CPU time held by a pid across all of its segments.
    pub fn busy_time(&self, pid: &str) -> i64 {
        self.segments
            .iter()
            .filter(|s| s.pid() == Some(pid))
            .map(|s| s.duration())
            .sum()
    }

    /// Whether consecutive segments leave no gaps.
    ///
    /// A correct discipline covers every instant of `[0, makespan)`
    /// with exactly one segment, marking idle time explicitly.
    pub fn is_contiguous(&self) -> bool {
        self.segments
            .windows(2)
            .all(|pair| pair[0].end == pair[1].start)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_raw() -> Vec<GanttSegment> {
        vec![
            GanttSegment::process("P1", 0, 2),
            GanttSegment::process("P1", 2, 4),
            GanttSegment::process("P2", 4, 5),
            GanttSegment::idle(5, 7),
            GanttSegment::process("P1", 7, 9),
        ]
    }

    #[test]
    fn test_segment_accessors() {
        let run = GanttSegment::process("P1", 3, 8);
        assert_eq!(run.duration(), 5);
        assert!(!run.is_idle());
        assert_eq!(run.pid(), Some("P1"));

        let idle = GanttSegment::idle(8, 10);
        assert!(idle.is_idle());
        assert_eq!(idle.pid(), None);
    }

    #[test]
    fn test_normalize_merges_adjacent_same_pid() {
        let timeline = Timeline::from_raw(sample_raw());
        // P1 0-2 and P1 2-4 collapse into P1 0-4
        assert_eq!(timeline.segment_count(), 4);
        assert_eq!(timeline.segments[0], GanttSegment::process("P1", 0, 4));
    }

    #[test]
    fn test_normalize_drops_zero_length() {
        let raw = vec![
            GanttSegment::process("P1", 0, 3),
            GanttSegment::process("P2", 3, 3),
            GanttSegment::process("P3", 3, 5),
        ];
        let timeline = Timeline::from_raw(raw);
        assert_eq!(timeline.segment_count(), 2);
        assert_eq!(timeline.segments[1], GanttSegment::process("P3", 3, 5));
    }

    #[test]
    fn test_normalize_does_not_merge_across_gap() {
        // Same pid but not time-adjacent → kept separate
        let raw = vec![
            GanttSegment::process("P1", 0, 2),
            GanttSegment::process("P1", 3, 5),
        ];
        let timeline = Timeline::from_raw(raw);
        assert_eq!(timeline.segment_count(), 2);
    }

    #[test]
    fn test_normalize_does_not_merge_idle_into_process() {
        let raw = vec![GanttSegment::process("P1", 0, 2), GanttSegment::idle(2, 4)];
        let timeline = Timeline::from_raw(raw);
        assert_eq!(timeline.segment_count(), 2);
    }

    #[test]
    fn test_normalize_idempotent() {
        let once = Timeline::from_raw(sample_raw());
        let twice = Timeline::from_raw(once.segments.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_makespan() {
        let timeline = Timeline::from_raw(sample_raw());
        assert_eq!(timeline.makespan(), 9);
        assert_eq!(Timeline::new().makespan(), 0);
    }

    #[test]
    fn test_segments_for_and_busy_time() {
        let timeline = Timeline::from_raw(sample_raw());
        assert_eq!(timeline.segments_for("P1").len(), 2); // 0-4 and 7-9
        assert_eq!(timeline.busy_time("P1"), 6);
        assert_eq!(timeline.busy_time("P2"), 1);
        assert_eq!(timeline.busy_time("P99"), 0);
    }

    #[test]
    fn test_completion_time() {
        let timeline = Timeline::from_raw(sample_raw());
        assert_eq!(timeline.completion_time("P1"), Some(9));
        assert_eq!(timeline.completion_time("P2"), Some(5));
        assert_eq!(timeline.completion_time("P99"), None);
    }

    #[test]
    fn test_is_contiguous() {
        let timeline = Timeline::from_raw(sample_raw());
        assert!(timeline.is_contiguous());

        let gapped = Timeline {
            segments: vec![
                GanttSegment::process("P1", 0, 2),
                GanttSegment::process("P2", 3, 4),
            ],
        };
        assert!(!gapped.is_contiguous());
    }

    #[test]
    fn test_timeline_json_round_trip() {
        let timeline = Timeline::from_raw(sample_raw());
        let json = serde_json::to_string(&timeline).unwrap();
        let back: Timeline = serde_json::from_str(&json).unwrap();
        assert_eq!(back, timeline);
    }
}
