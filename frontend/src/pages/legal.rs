use yew::prelude::*;
use yew_router::components::Link;

use crate::content::PRODUCT_NAME;
use crate::utils::current_year;
use crate::Route;

#[derive(Properties, PartialEq)]
struct LegalLayoutProps {
    title: &'static str,
    children: Children,
}

#[function_component(LegalLayout)]
fn legal_layout(props: &LegalLayoutProps) -> Html {
    html! {
        <div class="legal-page">
            <style>{LEGAL_CSS}</style>
            <div class="legal-content">
                <Link<Route> to={Route::Home} classes="legal-back">
                    <i class="fas fa-arrow-left"></i>{" Voltar"}
                </Link<Route>>
                <h1>{props.title}</h1>
                { for props.children.iter() }
                <p class="legal-footer">{format!("© {} {}", current_year(), PRODUCT_NAME)}</p>
            </div>
        </div>
    }
}

#[function_component(Terms)]
pub fn terms() -> Html {
    html! {
        <LegalLayout title="Termos de Uso">
            <p>{format!(
                "Ao adquirir o {} você recebe uma licença pessoal e intransferível de acesso ao material digital.",
                PRODUCT_NAME,
            )}</p>
            <p>{"O pagamento é processado por uma plataforma externa. Nenhum dado de pagamento é armazenado por esta página."}</p>
            <p>{"Você tem 7 dias a partir da compra para solicitar o reembolso integral, sem necessidade de justificativa."}</p>
        </LegalLayout>
    }
}

#[function_component(Privacy)]
pub fn privacy() -> Html {
    html! {
        <LegalLayout title="Política de Privacidade">
            <p>{"Esta página não cria contas nem guarda informações pessoais no seu navegador."}</p>
            <p>{"Utilizamos scripts de atribuição de terceiros para medir a origem das visitas. Bloquear esses scripts não afeta o funcionamento da página."}</p>
            <p>{"Os dados informados no checkout são tratados exclusivamente pela plataforma de pagamento."}</p>
        </LegalLayout>
    }
}

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <LegalLayout title="Página não encontrada">
            <p>{"O endereço acessado não existe."}</p>
        </LegalLayout>
    }
}

const LEGAL_CSS: &str = r#"
    .legal-page {
        min-height: 100vh;
        background: #001233;
        color: #dbeafe;
        padding: 4rem 1rem;
        font-family: 'Inter', system-ui, sans-serif;
    }
    .legal-content {
        max-width: 48rem;
        margin: 0 auto;
    }
    .legal-content h1 {
        color: #fff;
        font-size: 2.25rem;
        margin: 1.5rem 0;
    }
    .legal-back {
        color: #ffd700;
        text-decoration: none;
    }
    .legal-footer {
        margin-top: 3rem;
        font-size: 0.875rem;
        color: #60a5fa;
    }
"#;
