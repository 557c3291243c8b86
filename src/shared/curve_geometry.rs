//! Reine Geometrie-Funktionen für stückweise kubische Bézier-Kurven.
//!
//! Layer-neutral: wird von `app` (Cache, Render-Szene) und den Benchmarks
//! genutzt, ohne Abhängigkeit auf UI oder Renderer.
//!
//! Ablauf eines Rebuilds:
//! 1. Tangenten per finiter Differenzen ableiten (`derive_tangents`)
//! 2. Overrides einmalig einmischen (`effective_tangents`)
//! 3. Hermite → Bézier: `B1 = P[i] + T[i]/3`, `B2 = P[i+1] - T[i+1]/3`
//! 4. Segmente abtasten und an den Nahtstellen ohne Duplikate verketten
//! 5. Tangenten-Handles `H[i] = P[i] + T[i]/3` für die Visualisierung

use glam::Vec2;
use std::borrow::Cow;

/// Kleinste zulässige Abtastrate pro Segment (Anfangs- und Endpunkt).
pub const MIN_SAMPLES_PER_SEGMENT: usize = 2;

/// Skalierung Hermite-Tangente → Bézier-Handle.
const HANDLE_SCALE: f32 = 3.0;

/// Kubisches Bézier-Segment zwischen zwei aufeinanderfolgenden Kontrollpunkten.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicSegment {
    pub b0: Vec2,
    pub b1: Vec2,
    pub b2: Vec2,
    pub b3: Vec2,
}

impl CubicSegment {
    /// Baut das Segment aus Endpunkten und deren Tangenten (Hermite-Form).
    pub fn from_hermite(p0: Vec2, t0: Vec2, p1: Vec2, t1: Vec2) -> Self {
        Self {
            b0: p0,
            b1: handle_point(p0, t0),
            b2: p1 - t1 / HANDLE_SCALE,
            b3: p1,
        }
    }

    /// Position auf dem Segment für `t ∈ [0, 1]`.
    pub fn eval(&self, t: f32) -> Vec2 {
        cubic_bezier(self.b0, self.b1, self.b2, self.b3, t)
    }
}

/// B(t) = (1-t)³·P0 + 3(1-t)²t·P1 + 3(1-t)t²·P2 + t³·P3
pub fn cubic_bezier(p0: Vec2, p1: Vec2, p2: Vec2, p3: Vec2, t: f32) -> Vec2 {
    let u = 1.0 - t;
    let b0 = u * u * u;
    let b1 = 3.0 * u * u * t;
    let b2 = 3.0 * u * t * t;
    let b3 = t * t * t;
    b0 * p0 + b1 * p1 + b2 * p2 + b3 * p3
}

/// Sichtbarer Handle-Punkt einer Tangente: `P + T/3`.
pub fn handle_point(point: Vec2, tangent: Vec2) -> Vec2 {
    point + tangent / HANDLE_SCALE
}

/// Tangente, deren Handle genau auf `handle` liegt (Umkehrung von `handle_point`).
pub fn tangent_from_handle(point: Vec2, handle: Vec2) -> Vec2 {
    (handle - point) * HANDLE_SCALE
}

/// Leitet die automatischen Tangenten aus der Punktfolge ab.
///
/// - weniger als 2 Punkte: keine Tangenten
/// - genau 2 Punkte: beide Tangenten = Sehne `P1 - P0`
/// - sonst: einseitige Differenzen an den Rändern, innen `0.5 * (P[i+1] - P[i-1])`
///
/// Der Faktor 0.5 hängt nicht vom Punktabstand ab.
pub fn derive_tangents(points: &[Vec2]) -> Vec<Vec2> {
    let count = points.len();
    if count < 2 {
        return Vec::new();
    }
    if count == 2 {
        let chord = points[1] - points[0];
        return vec![chord, chord];
    }

    let n = count - 1;
    let mut tangents = Vec::with_capacity(count);
    tangents.push(points[1] - points[0]);
    for i in 1..n {
        tangents.push(0.5 * (points[i + 1] - points[i - 1]));
    }
    tangents.push(points[n] - points[n - 1]);
    tangents
}

/// Bringt die Override-Liste auf exakt `len` Einträge.
///
/// Fehlende Einträge werden als "kein Override" ergänzt, überzählige ignoriert.
pub fn reconcile_overrides(len: usize, overrides: &[Option<Vec2>]) -> Cow<'_, [Option<Vec2>]> {
    if overrides.len() == len {
        return Cow::Borrowed(overrides);
    }
    log::debug!(
        "Override-Liste ({}) passt nicht zur Punktanzahl ({}), wird angeglichen",
        overrides.len(),
        len
    );
    let mut reconciled = overrides[..overrides.len().min(len)].to_vec();
    reconciled.resize(len, None);
    Cow::Owned(reconciled)
}

/// Effektive Tangenten: abgeleitete Werte, an gesetzten Overrides ersetzt.
pub fn effective_tangents(points: &[Vec2], overrides: &[Option<Vec2>]) -> Vec<Vec2> {
    let mut tangents = derive_tangents(points);
    if tangents.is_empty() {
        return tangents;
    }
    let overrides = reconcile_overrides(points.len(), overrides);
    for (tangent, custom) in tangents.iter_mut().zip(overrides.iter()) {
        if let Some(custom) = custom {
            *tangent = *custom;
        }
    }
    tangents
}

/// Baut ein Bézier-Segment pro aufeinanderfolgendem Punktpaar.
///
/// `tangents` muss dieselbe Länge wie `points` haben.
pub fn build_segments(points: &[Vec2], tangents: &[Vec2]) -> Vec<CubicSegment> {
    debug_assert_eq!(points.len(), tangents.len());
    points
        .windows(2)
        .zip(tangents.windows(2))
        .map(|(p, t)| CubicSegment::from_hermite(p[0], t[0], p[1], t[1]))
        .collect()
}

/// Tastet `segment_count` Segmente mit je `samples` Punkten ab.
///
/// Der erste Sample jedes Folgesegments entfällt, da er mit dem letzten
/// Sample des Vorgängers identisch ist. Ergebnis: `segment_count * (samples - 1) + 1`.
fn sample_joined(
    segment_count: usize,
    samples: usize,
    eval: impl Fn(usize, f32) -> Vec2,
) -> Vec<Vec2> {
    if segment_count == 0 {
        return Vec::new();
    }
    let samples = samples.max(MIN_SAMPLES_PER_SEGMENT);
    let last = (samples - 1) as f32;
    let mut result = Vec::with_capacity(segment_count * (samples - 1) + 1);
    for seg in 0..segment_count {
        let first_k = if seg == 0 { 0 } else { 1 };
        for k in first_k..samples {
            let t = k as f32 / last;
            result.push(eval(seg, t));
        }
    }
    result
}

/// Abgetastete Polyline aller Bézier-Segmente (nahtlos verkettet).
pub fn sample_bezier_polyline(segments: &[CubicSegment], samples: usize) -> Vec<Vec2> {
    sample_joined(segments.len(), samples, |seg, t| segments[seg].eval(t))
}

/// Abgetastete Kontroll-Polyline: lineare Interpolation zwischen Rohpunkten.
///
/// Gleiches Abtast- und Verkettungsschema wie `sample_bezier_polyline`.
pub fn sample_control_polyline(points: &[Vec2], samples: usize) -> Vec<Vec2> {
    let segment_count = points.len().saturating_sub(1);
    sample_joined(segment_count, samples, |seg, t| {
        let a = points[seg];
        let b = points[seg + 1];
        a + t * (b - a)
    })
}

/// Handle-Punkte `H[i] = P[i] + T[i]/3` für jeden Kontrollpunkt.
pub fn tangent_handles(points: &[Vec2], tangents: &[Vec2]) -> Vec<Vec2> {
    points
        .iter()
        .zip(tangents)
        .map(|(&p, &t)| handle_point(p, t))
        .collect()
}

/// Erweitert eine 2D-Position auf ein Render-Tripel (z = 0).
pub fn to_triple(v: Vec2) -> [f32; 3] {
    [v.x, v.y, 0.0]
}

/// Abgeleitete Geometrie eines Rebuilds als flache Render-Tripel.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CurveGeometry {
    /// Kontrollpunkte (Spiegel des Stores, für Punkt-Primitive)
    pub control_points: Vec<[f32; 3]>,
    /// Lineare Kontroll-Polyline
    pub control_polyline: Vec<[f32; 3]>,
    /// Abgetastete Bézier-Kurve
    pub bezier_polyline: Vec<[f32; 3]>,
    /// Tangenten-Stummel als Linienpaare `P[i], H[i]`
    pub tangent_lines: Vec<[f32; 3]>,
    /// Handle-Spitzen `H[i]`
    pub tangent_handles: Vec<[f32; 3]>,
}

impl CurveGeometry {
    /// True wenn eine Kurve existiert (mindestens 2 Punkte).
    pub fn has_curve(&self) -> bool {
        !self.bezier_polyline.is_empty()
    }
}

/// Kompletter Neuaufbau aller abgeleiteten Sequenzen aus Punkten und Overrides.
///
/// Deterministisch: gleiche Eingaben liefern bit-identische Ausgaben.
pub fn rebuild(points: &[Vec2], overrides: &[Option<Vec2>], samples: usize) -> CurveGeometry {
    let control_points = points.iter().copied().map(to_triple).collect();
    if points.len() < 2 {
        return CurveGeometry {
            control_points,
            ..CurveGeometry::default()
        };
    }

    let tangents = effective_tangents(points, overrides);
    let segments = build_segments(points, &tangents);
    let handles = tangent_handles(points, &tangents);

    let tangent_lines = points
        .iter()
        .zip(&handles)
        .flat_map(|(&p, &h)| [to_triple(p), to_triple(h)])
        .collect();

    CurveGeometry {
        control_points,
        control_polyline: sample_control_polyline(points, samples)
            .into_iter()
            .map(to_triple)
            .collect(),
        bezier_polyline: sample_bezier_polyline(&segments, samples)
            .into_iter()
            .map(to_triple)
            .collect(),
        tangent_lines,
        tangent_handles: handles.into_iter().map(to_triple).collect(),
    }
}
