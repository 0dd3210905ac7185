use polars::prelude::*;

use crate::{
    defaults,
    utils::{
        enums::Leg,
        functions,
        vectors::{PtEtaPhiM, Vec3},
    },
    Define,
};

/// Fraction of the visible zeta-projection subtracted in [`pzetamissvis`].
const PZETA_VIS_FRACTION: f64 = 0.85;

/// Index stored at `position` of the pair vector, or -1 when the pair vector
/// is shorter than that.
fn pair_index(pairname: &str, position: Leg) -> Expr {
    col(pairname)
        .list()
        .get(lit(position.index()), true)
        .fill_null(lit(-1))
        .cast(DataType::Int64)
}

/// Element of a per-object array at `index`, null when the index is negative
/// or beyond the end of the array.
fn lookup(column: &str, index: Expr) -> Expr {
    when(index.clone().gt_eq(lit(0)))
        .then(col(column).list().get(index, true))
        .otherwise(lit(NULL))
}

/// Write out the transverse momentum of a four-momentum column.
pub fn pt<F: Define>(df: F, outputname: &str, inputvector: &str) -> F {
    df.define(
        outputname,
        PtEtaPhiM::new(inputvector).pt().cast(DataType::Float32),
    )
}

/// Write out the pseudorapidity of a four-momentum column.
pub fn eta<F: Define>(df: F, outputname: &str, inputvector: &str) -> F {
    df.define(
        outputname,
        PtEtaPhiM::new(inputvector).eta().cast(DataType::Float32),
    )
}

/// Write out the azimuthal angle of a four-momentum column.
pub fn phi<F: Define>(df: F, outputname: &str, inputvector: &str) -> F {
    let p4 = PtEtaPhiM::new(inputvector);
    df.define(
        outputname,
        // negative pt marks a four-momentum the selection flagged invalid
        when(p4.pt().lt(lit(0.0)))
            .then(lit(defaults::DEFAULT_FLOAT))
            .otherwise(p4.phi())
            .cast(DataType::Float32),
    )
}

/// Write out the invariant mass of a four-momentum column.
pub fn mass<F: Define>(df: F, outputname: &str, inputvector: &str) -> F {
    let p4 = PtEtaPhiM::new(inputvector);
    df.define(
        outputname,
        // negative pt marks a four-momentum the selection flagged invalid
        when(p4.pt().lt(lit(0.0)))
            .then(lit(defaults::DEFAULT_FLOAT))
            .otherwise(p4.mass())
            .cast(DataType::Float32),
    )
}

/// Write out the transverse impact parameter of the particle at `position` in
/// the pair vector.
pub fn dxy<F: Define>(
    df: F,
    outputname: &str,
    position: Leg,
    pairname: &str,
    dxycolumn: &str,
) -> F {
    df.define(
        outputname,
        lookup(dxycolumn, pair_index(pairname, position))
            .fill_null(lit(defaults::DEFAULT_FLOAT))
            .cast(DataType::Float32),
    )
}

/// Write out the longitudinal impact parameter of the particle at `position`
/// in the pair vector.
pub fn dz<F: Define>(df: F, outputname: &str, position: Leg, pairname: &str, dzcolumn: &str) -> F {
    df.define(
        outputname,
        lookup(dzcolumn, pair_index(pairname, position))
            .fill_null(lit(defaults::DEFAULT_FLOAT))
            .cast(DataType::Float32),
    )
}

/// Write out the charge of the particle at `position` in the pair vector.
pub fn charge<F: Define>(
    df: F,
    outputname: &str,
    position: Leg,
    pairname: &str,
    chargecolumn: &str,
) -> F {
    df.define(
        outputname,
        lookup(chargecolumn, pair_index(pairname, position))
            .fill_null(lit(defaults::DEFAULT_INT))
            .cast(DataType::Int32),
    )
}

/// Write out the visible mass of the dilepton system, the invariant mass of
/// the sum of the two given four-momenta.
pub fn m_vis<F: Define>(df: F, outputname: &str, inputvectors: [&str; 2]) -> F {
    let [p4_1, p4_2] = inputvectors.map(PtEtaPhiM::new);
    let dilepton = &p4_1 + &p4_2;
    df.define(
        outputname,
        when(p4_1.pt().lt(lit(0.0)).or(p4_2.pt().lt(lit(0.0))))
            .then(lit(defaults::DEFAULT_FLOAT))
            .otherwise(dilepton.mag())
            .cast(DataType::Float32),
    )
}

/// Write out the transverse momentum of the dilepton system.
pub fn pt_vis<F: Define>(df: F, outputname: &str, inputvectors: [&str; 2]) -> F {
    let [p4_1, p4_2] = inputvectors.map(PtEtaPhiM::new);
    let dilepton = &p4_1 + &p4_2;
    df.define(
        outputname,
        when(p4_1.pt().lt(lit(0.0)).or(p4_2.pt().lt(lit(0.0))))
            .then(lit(defaults::DEFAULT_FLOAT))
            .otherwise(dilepton.pt())
            .cast(DataType::Float32),
    )
}

/// Write out the zeta-projection discriminant
/// $`D_\zeta = p_\zeta^\text{miss} - 0.85\, p_\zeta^\text{vis}`$, where both
/// projections are taken along $`\hat{\zeta}`$, the bisector of the two
/// leptons' directions in the transverse plane.
///
/// See D. Jang, "Search for MSSM Higgs decaying to tau pairs in pp collision
/// at sqrt(s) = 1.96 TeV at CDF", FERMILAB-THESIS-2006-11.
pub fn pzetamissvis<F: Define>(
    df: F,
    outputname: &str,
    particle_1_p4: &str,
    particle_2_p4: &str,
    met: &str,
) -> F {
    let p4_1 = PtEtaPhiM::new(particle_1_p4);
    let p4_2 = PtEtaPhiM::new(particle_2_p4);
    let met = PtEtaPhiM::new(met);
    let zeta = (p4_1.transverse_unit() + p4_2.transverse_unit()).unit();
    let met_t = Vec3::from([met.px(), met.py(), lit(0.0)]);
    let dilepton = p4_1.vec3() + p4_2.vec3();
    let visible = Vec3::from([dilepton.x(), dilepton.y(), lit(0.0)]);
    df.define(
        outputname,
        met_t.dot(&zeta) - lit(PZETA_VIS_FRACTION) * visible.dot(&zeta),
    )
}

/// Write out the transverse mass of the dilepton system with respect to the
/// missing transverse momentum.
pub fn mt_dilepton_met<F: Define>(
    df: F,
    outputname: &str,
    particle_1_p4: &str,
    particle_2_p4: &str,
    met: &str,
) -> F {
    let dilepton = PtEtaPhiM::new(particle_1_p4) + PtEtaPhiM::new(particle_2_p4);
    let met = PtEtaPhiM::new(met);
    df.define(
        outputname,
        functions::transverse_mass(dilepton.pt(), dilepton.phi(), met.pt(), met.phi())
            .cast(DataType::Float32),
    )
}

/// Write out the transverse mass of a single particle with respect to the
/// missing transverse momentum.
pub fn mt<F: Define>(df: F, outputname: &str, particle_p4: &str, met: &str) -> F {
    let p4 = PtEtaPhiM::new(particle_p4);
    let met = PtEtaPhiM::new(met);
    df.define(
        outputname,
        functions::transverse_mass(p4.pt(), p4.phi(), met.pt(), met.phi())
            .cast(DataType::Float32),
    )
}

/// Write out the isolation of the particle at `position` in the pair vector.
pub fn isolation<F: Define>(
    df: F,
    outputname: &str,
    position: Leg,
    pairname: &str,
    isolationcolumn: &str,
) -> F {
    df.define(
        outputname,
        lookup(isolationcolumn, pair_index(pairname, position))
            .fill_null(lit(defaults::DEFAULT_FLOAT))
            .cast(DataType::Float32),
    )
}

/// Write out the PDG id of the generator particle at `position` in the pair
/// vector.
pub fn pdgid<F: Define>(
    df: F,
    outputname: &str,
    position: Leg,
    pairname: &str,
    pdgidcolumn: &str,
) -> F {
    df.define(
        outputname,
        lookup(pdgidcolumn, pair_index(pairname, position))
            .fill_null(lit(defaults::DEFAULT_PDGID))
            .cast(DataType::Int32),
    )
}

/// Write out the azimuthal separation of two four-momenta, wrapped into
/// $`(-\pi, \pi]`$.
pub fn delta_phi<F: Define>(df: F, outputname: &str, p_1_p4: &str, p_2_p4: &str) -> F {
    let p4_1 = PtEtaPhiM::new(p_1_p4);
    let p4_2 = PtEtaPhiM::new(p_2_p4);
    df.define(
        outputname,
        when(p4_1.pt().lt(lit(0.0)).or(p4_2.pt().lt(lit(0.0))))
            .then(lit(defaults::DEFAULT_FLOAT))
            .otherwise(functions::delta_phi(p4_1.phi(), p4_2.phi()))
            .cast(DataType::Float32),
    )
}

/// Write out the angular separation
/// $`\Delta R = \sqrt{\Delta\eta^2 + \Delta\phi^2}`$ of two four-momenta.
pub fn delta_r<F: Define>(df: F, outputname: &str, p_1_p4: &str, p_2_p4: &str) -> F {
    let p4_1 = PtEtaPhiM::new(p_1_p4);
    let p4_2 = PtEtaPhiM::new(p_2_p4);
    let deta = p4_1.eta() - p4_2.eta();
    let dphi = functions::delta_phi(p4_1.phi(), p4_2.phi());
    df.define(
        outputname,
        when(p4_1.pt().lt(lit(0.0)).or(p4_2.pt().lt(lit(0.0))))
            .then(lit(defaults::DEFAULT_FLOAT))
            .otherwise((deta.pow(2) + dphi.pow(2)).sqrt())
            .cast(DataType::Float32),
    )
}

/// Quantities specific to hadronic taus.
pub mod tau {
    use super::*;

    /// Write out the decay mode of the tau at `position` in the pair vector.
    pub fn decaymode<F: Define>(
        df: F,
        outputname: &str,
        position: Leg,
        pairname: &str,
        decaymodecolumn: &str,
    ) -> F {
        df.define(
            outputname,
            lookup(decaymodecolumn, pair_index(pairname, position))
                .fill_null(lit(defaults::DEFAULT_INT))
                .cast(DataType::Int32),
        )
    }

    /// Write out the generator match of the tau at `position` in the pair
    /// vector. Match codes are
    /// ```text
    ///   1 = prompt electron,
    ///   2 = prompt muon,
    ///   3 = tau->e decay,
    ///   4 = tau->mu decay,
    ///   5 = hadronic tau decay,
    ///   0 = unknown or unmatched
    /// ```
    pub fn genmatch<F: Define>(
        df: F,
        outputname: &str,
        position: Leg,
        pairname: &str,
        genmatchcolumn: &str,
    ) -> F {
        df.define(
            outputname,
            lookup(genmatchcolumn, pair_index(pairname, position))
                .fill_null(lit(defaults::DEFAULT_UCHAR as i32))
                .cast(DataType::UInt8),
        )
    }

    /// Write out the pt of the reco jet associated with the tau at
    /// `position` in the pair vector.
    pub fn matching_jet_pt<F: Define>(
        df: F,
        outputname: &str,
        position: Leg,
        pairname: &str,
        taujet_index: &str,
        jetpt_column: &str,
    ) -> F {
        let tauindex = pair_index(pairname, position);
        let jetindex = lookup(taujet_index, tauindex)
            .fill_null(lit(-1))
            .cast(DataType::Int64);
        df.define(
            outputname,
            lookup(jetpt_column, jetindex)
                .fill_null(lit(defaults::DEFAULT_FLOAT))
                .cast(DataType::Float32),
        )
    }

    /// Write out the pt of the gen jet matched to the reco jet which is
    /// associated with the tau at `position` in the pair vector:
    /// ```text
    ///   Tau --> recoJet --> GenJet
    /// ```
    pub fn matching_genjet_pt<F: Define>(
        df: F,
        outputname: &str,
        position: Leg,
        pairname: &str,
        taujet_index: &str,
        genjet_index: &str,
        genjetpt_column: &str,
    ) -> F {
        let tauindex = pair_index(pairname, position);
        let jetindex = lookup(taujet_index, tauindex)
            .fill_null(lit(-1))
            .cast(DataType::Int64);
        let genjetindex = lookup(genjet_index, jetindex)
            .fill_null(lit(-1))
            .cast(DataType::Int64);
        df.define(
            outputname,
            lookup(genjetpt_column, genjetindex)
                .fill_null(lit(defaults::DEFAULT_FLOAT))
                .cast(DataType::Float32),
        )
    }
}
