//! Plan catalogue and the monthly/annual billing toggle.

#[cfg(test)]
#[path = "pricing_test.rs"]
mod pricing_test;

use crate::util::format::format_brl;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BillingPeriod {
    #[default]
    Monthly,
    Annual,
}

impl BillingPeriod {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Monthly => Self::Annual,
            Self::Annual => Self::Monthly,
        }
    }

    #[must_use]
    pub fn is_annual(self) -> bool {
        self == Self::Annual
    }

    /// Caption under the price.
    #[must_use]
    pub fn period_label(self) -> &'static str {
        match self {
            Self::Monthly => "por mês",
            Self::Annual => "por mês, cobrado anualmente",
        }
    }
}

/// One pricing card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Plan {
    pub id: &'static str,
    pub name: &'static str,
    pub tagline: &'static str,
    /// Per-month price on monthly billing, in whole reais.
    pub monthly: u32,
    /// Per-month price on annual billing, in whole reais.
    pub annual_monthly: u32,
    pub features: &'static [&'static str],
    pub highlighted: bool,
}

pub const PLANS: &[Plan] = &[
    Plan {
        id: "basic",
        name: "Básico",
        tagline: "Para pequenas equipes começando a automatizar.",
        monthly: 49,
        annual_monthly: 39,
        features: &["Até 5 usuários", "10 fluxos ativos", "Relatórios básicos", "Suporte por e-mail"],
        highlighted: false,
    },
    Plan {
        id: "pro",
        name: "Pro",
        tagline: "Para equipes em crescimento.",
        monthly: 99,
        annual_monthly: 79,
        features: &[
            "Até 20 usuários",
            "Fluxos ilimitados",
            "Relatórios avançados",
            "Integrações premium",
            "Suporte prioritário",
        ],
        highlighted: true,
    },
    Plan {
        id: "enterprise",
        name: "Empresarial",
        tagline: "Para operações de grande porte.",
        monthly: 199,
        annual_monthly: 159,
        features: &[
            "Usuários ilimitados",
            "Fluxos ilimitados",
            "Painéis personalizados",
            "SSO e auditoria",
            "Gerente de conta dedicado",
        ],
        highlighted: false,
    },
];

impl Plan {
    /// Per-month price shown for `period`.
    #[must_use]
    pub fn price(&self, period: BillingPeriod) -> u32 {
        match period {
            BillingPeriod::Monthly => self.monthly,
            BillingPeriod::Annual => self.annual_monthly,
        }
    }

    /// Yearly total for `period`.
    #[must_use]
    pub fn yearly_total(&self, period: BillingPeriod) -> u32 {
        self.price(period) * 12
    }

    /// `Total: R$ 1.188/ano`.
    #[must_use]
    pub fn total_label(&self, period: BillingPeriod) -> String {
        format!("Total: {}/ano", format_brl(self.yearly_total(period)))
    }

    /// Reais saved per year by paying annually.
    #[must_use]
    pub fn annual_savings(&self) -> u32 {
        self.yearly_total(BillingPeriod::Monthly)
            .saturating_sub(self.yearly_total(BillingPeriod::Annual))
    }

    /// Savings badge shown on annual billing.
    #[must_use]
    pub fn savings_label(&self) -> String {
        format!("Economize {}/ano", format_brl(self.annual_savings()))
    }
}
