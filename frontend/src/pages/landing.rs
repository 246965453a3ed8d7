use web_sys::{Element, ScrollBehavior, ScrollIntoViewOptions};
use yew::prelude::*;
use yew_router::components::Link;

use crate::components::countdown_timer::CountdownTimer;
use crate::components::expandable_module::ExpandableModule;
use crate::components::faq_item::FaqItem;
use crate::components::floating_cta::FloatingCta;
use crate::components::purchase_notification::PurchaseNotification;
use crate::components::revealable_bonus::RevealableBonus;
use crate::components::spots_badge::SpotsBadge;
use crate::components::toast::{ToastAction, ToastQueue, ToastViewport};
use crate::config;
use crate::content::{
    BONUSES, BONUS_TOTAL, COURSE_MODULES, FAQS, GUARANTEE_SEAL_URL, HERO_BACKGROUND_URL,
    INSTALLMENTS, LEARNING_AREAS, PAYMENT_METHODS, PRICE, PRODUCT_NAME, STAY_THE_SAME,
    TESTIMONIALS, TRANSFORM,
};
use crate::hooks::{use_interval, use_scrolled_past};
use crate::utils::checkout::checkout_callback;
use crate::utils::current_year;
use crate::widgets::{Accordion, RevealTracker, ScarcityAction, ScarcityCounter};
use crate::Route;

#[derive(Clone, Copy, PartialEq)]
enum ContentTab {
    Modules,
    Bonuses,
}

#[function_component(Landing)]
pub fn landing() -> Html {
    let cfg = config::get();

    let spots = use_reducer(|| ScarcityCounter::new(cfg.spots_start));
    let module_accordion = use_reducer(Accordion::<u32>::new);
    let faq_accordion = use_reducer(Accordion::<usize>::new);
    let bonuses = use_state(|| RevealTracker::new(BONUSES.len()));
    let tab = use_state(|| ContentTab::Modules);
    let toasts = use_reducer(ToastQueue::default);
    let offer_ref = use_node_ref();
    let show_floating_cta = use_scrolled_past(offer_ref.clone());

    // Scroll to top only on initial mount
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );

    {
        let dispatcher = spots.dispatcher();
        use_interval(
            cfg.spots_interval_ms(),
            Callback::from(move |_| dispatcher.dispatch(ScarcityAction::Tick)),
        );
    }

    let on_module_toggle = {
        let dispatcher = module_accordion.dispatcher();
        Callback::from(move |number: u32| dispatcher.dispatch(number))
    };
    let on_faq_toggle = {
        let dispatcher = faq_accordion.dispatcher();
        Callback::from(move |id: usize| dispatcher.dispatch(id))
    };

    let on_reveal = {
        let bonuses = bonuses.clone();
        let toasts = toasts.dispatcher();
        Callback::from(move |index: usize| {
            let mut next = (*bonuses).clone();
            let outcome = next.reveal(index);
            bonuses.set(next);
            if outcome.completed {
                log::info!("All {} bonuses revealed", outcome.revealed_count);
                toasts.dispatch(ToastAction::Push {
                    title: "Todos os bônus desbloqueados!".to_string(),
                    description: format!("Você desbloqueou {} em bônus exclusivos!", BONUS_TOTAL),
                });
            }
        })
    };
    let on_toast_close = {
        let dispatcher = toasts.dispatcher();
        Callback::from(move |id: u32| dispatcher.dispatch(ToastAction::Remove(id)))
    };

    let scroll_to_offer = {
        let offer_ref = offer_ref.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(section) = offer_ref.cast::<Element>() {
                let options = ScrollIntoViewOptions::new();
                options.set_behavior(ScrollBehavior::Smooth);
                section.scroll_into_view_with_scroll_into_view_options(&options);
            }
        })
    };
    let select_tab = |target: ContentTab| {
        let tab = tab.clone();
        Callback::from(move |_: MouseEvent| tab.set(target))
    };

    let all_revealed = bonuses.all_revealed();

    html! {
        <div class="landing-page">
            <style>{LANDING_CSS}</style>

            <section class="hero">
                <div class="hero-background">
                    <div class="hero-gradient"></div>
                    <div class="hero-image" style={format!("background-image: url('{}');", HERO_BACKGROUND_URL)}></div>
                    <div class="hero-particles">
                        { for (0..20u32).map(|i| {
                            let size = 5 + (i * 7) % 10;
                            html! {
                                <div class="particle" style={format!(
                                    "width: {size}px; height: {size}px; top: {}%; left: {}%;",
                                    (i * 37) % 100,
                                    (i * 53 + 11) % 100,
                                )}></div>
                            }
                        }) }
                    </div>
                </div>

                <SpotsBadge spots={spots.remaining()} />

                <div class="hero-content">
                    <h1 class="hero-title">
                        <span class="hero-title-line">{"DOMINE SUA MENTE "}</span>
                        <span class="hero-title-line accent">{"CONTROLE SUA VIDA"}</span>
                    </h1>

                    <div class="video-frame">
                        <iframe
                            src={cfg.video_embed_url.clone()}
                            title="Manual Estoico - Vídeo de apresentação"
                            frameborder="0"
                            allow="accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture"
                            allowfullscreen=true
                            loading="lazy"
                        ></iframe>
                    </div>

                    <span class="badge badge-blue">{"ACESSO IMEDIATO"}</span>
                    <p class="hero-subtitle">
                        {"O Sistema Definitivo Que Já Transformou a Vida de "}
                        <span class="highlight">{"3.111 Pessoas"}</span>
                        {" Através do Poder do Estoicismo"}
                    </p>

                    <button class="cta-button" onclick={scroll_to_offer}>
                        {"QUERO COMEÇAR AGORA"}
                        <i class="fas fa-arrow-right"></i>
                    </button>

                    <div class="trust-row">
                        <span><i class="fas fa-circle-check"></i>{"Acesso Imediato"}</span>
                        <span><i class="fas fa-shield-halved"></i>{"Garantia de 7 Dias"}</span>
                        <span><i class="fas fa-clock"></i>{"Oferta por Tempo Limitado"}</span>
                    </div>
                </div>
            </section>

            <section class="section learn-section">
                <div class="section-header">
                    <span class="badge badge-blue">{"O QUE VOCÊ VAI DOMINAR"}</span>
                    <h2>{"O Que Você Vai "}<span class="highlight">{"Aprender"}</span></h2>
                    <p>{"Domine estas 6 áreas essenciais e transforme completamente sua vida"}</p>
                </div>
                <div class="learn-grid">
                    { for LEARNING_AREAS.iter().map(|area| html! {
                        <div class="learn-card">
                            <div class="learn-icon"><i class={area.icon}></i></div>
                            <h3>{area.title}</h3>
                            <p>{area.description}</p>
                        </div>
                    }) }
                </div>
                <div class="section-cta">
                    <button class="cta-button" onclick={checkout_callback()}>
                        {"QUERO TRANSFORMAR MINHA MENTE"}
                        <i class="fas fa-arrow-right"></i>
                    </button>
                </div>
            </section>

            <section class="section testimonials-section">
                <div class="section-header">
                    <span class="badge badge-blue">{"DEPOIMENTOS"}</span>
                    <h2>{"Pessoas Comuns, "}<span class="highlight">{"Resultados Extraordinários"}</span></h2>
                    <p>{format!("Depoimentos não editados de pessoas que investiram apenas {} no {}", PRICE, PRODUCT_NAME)}</p>
                </div>
                <div class="testimonial-container">
                    { for TESTIMONIALS.iter().map(|t| html! {
                        <div class="testimonial">
                            <img src={t.image_url} alt={t.alt} loading="lazy" />
                        </div>
                    }) }
                </div>

                <div class="section-header content-header">
                    <span class="badge badge-gold">{"CONTEÚDO EXCLUSIVO"}</span>
                    <h2>{"Tudo Que Você Vai "}<span class="highlight">{"Receber"}</span></h2>
                    <p>{"Um sistema completo para transformar sua mente através do Estoicismo"}</p>
                </div>

                <div class="content-tabs">
                    <div class="tab-list">
                        <button
                            class={classes!("tab-trigger", (*tab == ContentTab::Modules).then_some("active"))}
                            onclick={select_tab(ContentTab::Modules)}
                        >
                            <i class="fas fa-book-open"></i>{"Módulos"}
                        </button>
                        <button
                            class={classes!("tab-trigger", (*tab == ContentTab::Bonuses).then_some("active"))}
                            onclick={select_tab(ContentTab::Bonuses)}
                        >
                            <i class="fas fa-gift"></i>{"Bônus"}
                        </button>
                    </div>

                    if *tab == ContentTab::Modules {
                        <div class="tab-panel modules-panel">
                            { for COURSE_MODULES.iter().map(|module| html! {
                                <ExpandableModule
                                    key={module.number}
                                    {module}
                                    expanded={module_accordion.is_expanded(&module.number)}
                                    on_toggle={on_module_toggle.clone()}
                                />
                            }) }
                        </div>
                    } else {
                        <div class="tab-panel bonuses-panel">
                            <div class="bonus-intro">
                                <h3><i class="fas fa-wand-magic-sparkles"></i>{"Desbloqueie Todos os Bônus Exclusivos"}</h3>
                                <p>{format!(
                                    "Clique nos botões abaixo para revelar cada um dos {} bônus exclusivos que você receberá ao adquirir o {} hoje.",
                                    bonuses.len(),
                                    PRODUCT_NAME,
                                )}</p>
                                <div class="progress-row">
                                    <div class="progress-track">
                                        <div class="progress-fill" style={format!("width: {}%;", bonuses.percent())}></div>
                                    </div>
                                    <span>{format!("{}/{} desbloqueados", bonuses.revealed_count(), bonuses.len())}</span>
                                </div>
                            </div>

                            <div class="bonus-grid">
                                { for BONUSES.iter().enumerate().map(|(index, bonus)| html! {
                                    <RevealableBonus
                                        key={index}
                                        {index}
                                        {bonus}
                                        revealed={bonuses.is_revealed(index)}
                                        on_reveal={on_reveal.clone()}
                                    />
                                }) }
                            </div>

                            <div class="bonus-total">
                                <h3>
                                    {"Valor Total dos Bônus: "}
                                    <span class="highlight">{if all_revealed { BONUS_TOTAL } else { "???" }}</span>
                                </h3>
                                <p>
                                    {if all_revealed {
                                        "Todos inclusos hoje na sua inscrição sem custo adicional!"
                                    } else {
                                        "Continue revelando para ver o valor total dos bônus!"
                                    }}
                                </p>
                            </div>
                        </div>
                    }
                </div>
            </section>

            <section class="section offer-section" ref={offer_ref}>
                <div class="countdown-panel">
                    <p>{"ESTA OFERTA ESPECIAL EXPIRA EM:"}</p>
                    <CountdownTimer start={cfg.countdown_start} />
                </div>

                <div class="offer-card">
                    <h2>
                        {"Transforme Sua Mente Por Apenas "}
                        <span class="highlight">{PRICE}<span class="price-note">{"à vista"}</span></span>
                    </h2>
                    <p class="installments">{INSTALLMENTS}</p>

                    <button class="cta-button cta-large" onclick={checkout_callback()}>
                        {"MUDAR MINHA VIDA AGORA"}
                        <i class="fas fa-arrow-right"></i>
                    </button>

                    <div class="trust-row">
                        <span><i class="fas fa-shield-halved"></i>{"Garantia de 7 dias"}</span>
                        <span><i class="fas fa-lock"></i>{"Pagamento 100% seguro"}</span>
                        <span><i class="fas fa-circle-check"></i>{"Acesso imediato"}</span>
                    </div>
                    <div class="payment-methods">
                        { for PAYMENT_METHODS.iter().map(|method| html! {
                            <span class="payment-method">{*method}</span>
                        }) }
                    </div>
                </div>
            </section>

            <section class="section guarantee-section">
                <div class="guarantee-card">
                    <div class="guarantee-seal">
                        <div class="seal-ping"></div>
                        <img src={GUARANTEE_SEAL_URL} alt="Garantia" />
                    </div>
                    <div class="guarantee-text">
                        <h2>{"Garantia Incondicional de 7 Dias"}</h2>
                        <p>{"Não vou te enrolar com promessas complicadas. A garantia é simples:"}</p>
                        <p>
                            <span class="highlight">
                                {format!("Se você não sentir que o {} vale pelo menos 10 vezes o que você pagou, eu devolvo seu dinheiro.", PRODUCT_NAME)}
                            </span>
                            {" Sem perguntas. Sem complicações."}
                        </p>
                        <p>{"Você tem 7 dias para avaliar o material. Se não ficar satisfeito por qualquer motivo, basta enviar um email e devolveremos seu dinheiro na hora."}</p>
                        <p>{"Estou assumindo todo o risco porque sei o poder transformador deste material. Você não tem nada a perder e uma mente inabalável a ganhar."}</p>
                    </div>
                </div>
            </section>

            <section class="section faq-section">
                <div class="section-header">
                    <h2>{"Perguntas "}<span class="highlight">{"Frequentes"}</span></h2>
                </div>
                <div class="faq-list">
                    { for FAQS.iter().enumerate().map(|(id, faq)| html! {
                        <FaqItem
                            key={id}
                            {id}
                            {faq}
                            open={faq_accordion.is_expanded(&id)}
                            on_toggle={on_faq_toggle.clone()}
                        />
                    }) }
                </div>

                <div class="mid-cta">
                    <h3>{"Tudo Isso Por Apenas "}<span class="highlight">{PRICE}</span></h3>
                    <p>{"Menos que o preço de um jantar para transformar sua mente para sempre"}</p>
                    <button class="cta-button" onclick={checkout_callback()}>
                        {"QUERO GARANTIR AGORA"}
                        <i class="fas fa-arrow-right"></i>
                    </button>
                    <div class="mid-cta-spots">
                        <i class="fas fa-triangle-exclamation"></i>
                        <span>{format!("Apenas {} vagas disponíveis neste valor", spots.remaining())}</span>
                    </div>
                </div>

                <div class="final-cta">
                    <span class="badge badge-gold">{"COMECE SUA TRANSFORMAÇÃO HOJE"}</span>
                    <h2>{"Duas Escolhas. "}<span class="highlight">{"Um Momento Decisivo."}</span></h2>
                    <p class="final-lead">{"Neste exato momento, você está diante de uma escolha que pode mudar o curso da sua vida."}</p>

                    <div class="paths">
                        <div class="path-card">
                            <h3><i class="fas fa-xmark path-no"></i>{"Caminho 1: Continuar Como Está"}</h3>
                            <ul>
                                { for STAY_THE_SAME.iter().map(|item| html! {
                                    <li><i class="fas fa-xmark path-no"></i><span>{*item}</span></li>
                                }) }
                            </ul>
                        </div>
                        <div class="path-card path-yes-card">
                            <h3><i class="fas fa-circle-check path-yes"></i>{"Caminho 2: Transformar Sua Mente"}</h3>
                            <ul>
                                { for TRANSFORM.iter().map(|item| html! {
                                    <li><i class="fas fa-circle-check path-yes"></i><span>{*item}</span></li>
                                }) }
                            </ul>
                        </div>
                    </div>

                    <p class="quote">{"\"O melhor momento para plantar uma árvore foi há 20 anos. O segundo melhor momento é agora.\""}</p>

                    <button class="cta-button cta-large cta-wide" onclick={checkout_callback()}>
                        {"TRANSFORMAR MINHA MENTE"}
                        <i class="fas fa-arrow-right"></i>
                    </button>
                    <div class="final-trust">
                        <i class="fas fa-lock"></i>
                        <span>{"Pagamento 100% seguro"}</span>
                        <span>{"•"}</span>
                        <span>{"Acesso imediato"}</span>
                        <span>{"•"}</span>
                        <span>{"Garantia de 7 dias"}</span>
                    </div>
                </div>
            </section>

            <PurchaseNotification
                period_ms={cfg.notification_period_ms()}
                display_ms={cfg.notification_display_ms()}
            />
            <FloatingCta visible={show_floating_cta} spots={spots.remaining()} />
            <ToastViewport toasts={toasts.toasts.clone()} on_close={on_toast_close} />

            <footer class="footer">
                <div class="footer-brand">
                    <i class="fas fa-book-open"></i>
                    <span>{PRODUCT_NAME}</span>
                </div>
                <div class="footer-links">
                    <Link<Route> to={Route::Terms}>{"Termos de Uso"}</Link<Route>>
                    <Link<Route> to={Route::Privacy}>{"Política de Privacidade"}</Link<Route>>
                </div>
                <p class="footer-copy">{format!("© {} {} - Todos os direitos reservados.", current_year(), PRODUCT_NAME)}</p>
            </footer>
        </div>
    }
}

const LANDING_CSS: &str = r#"
    .landing-page {
        display: flex;
        flex-direction: column;
        min-height: 100vh;
        background: #001233;
        color: #fff;
        font-family: 'Inter', system-ui, sans-serif;
    }
    .highlight {
        color: #ffd700;
        font-weight: 700;
    }
    .badge {
        display: inline-block;
        border-radius: 9999px;
        padding: 0.25rem 1rem;
        font-size: 0.875rem;
        margin-bottom: 1rem;
    }
    .badge-blue {
        background: rgba(59, 130, 246, 0.2);
        color: #93c5fd;
        border: 1px solid rgba(96, 165, 250, 0.3);
    }
    .badge-gold {
        background: rgba(255, 215, 0, 0.2);
        color: #ffd700;
        border: 1px solid rgba(255, 215, 0, 0.3);
    }
    .badge-free {
        background: rgba(20, 83, 45, 0.5);
        color: #86efac;
        border: 1px solid rgba(22, 101, 52, 0.5);
        margin: 0 0 0 0.5rem;
        padding: 0.1rem 0.6rem;
        font-size: 0.75rem;
    }
    .cta-button {
        display: inline-flex;
        align-items: center;
        gap: 0.5rem;
        background: #ffd700;
        color: #001233;
        font-weight: 700;
        font-size: 1.125rem;
        border: none;
        border-radius: 9999px;
        padding: 1rem 2rem;
        cursor: pointer;
        box-shadow: 0 10px 15px rgba(30, 58, 138, 0.3);
        transition: transform 0.3s ease, background 0.3s ease;
    }
    .cta-button:hover {
        background: #e6c200;
        transform: scale(1.05);
    }
    .cta-large {
        font-size: 1.25rem;
        padding: 1.25rem 2.5rem;
    }
    .cta-wide {
        width: 100%;
        justify-content: center;
    }
    .section {
        padding: 4rem 1rem;
    }
    .section-header {
        max-width: 48rem;
        margin: 0 auto 3rem;
        text-align: center;
    }
    .section-header h2 {
        font-size: 2.25rem;
        margin-bottom: 1.5rem;
    }
    .section-header p {
        font-size: 1.25rem;
        color: #bfdbfe;
    }
    .section-cta {
        margin-top: 3rem;
        text-align: center;
    }

    .hero {
        position: relative;
        padding: 5rem 1rem;
        overflow: hidden;
    }
    .hero-background, .hero-gradient, .hero-image, .hero-particles {
        position: absolute;
        inset: 0;
    }
    .hero-gradient {
        background: linear-gradient(135deg, #001233, #001845, #023e8a);
        opacity: 0.8;
    }
    .hero-image {
        background-size: cover;
        background-position: center;
        opacity: 0.1;
    }
    .particle {
        position: absolute;
        border-radius: 9999px;
        background: rgba(96, 165, 250, 0.1);
    }
    .hero-content {
        position: relative;
        z-index: 10;
        max-width: 48rem;
        margin: 0 auto;
        text-align: center;
    }
    .hero-title {
        font-size: 3.5rem;
        letter-spacing: -0.02em;
        margin-bottom: 1.5rem;
    }
    .hero-title-line {
        display: block;
    }
    .hero-title-line.accent {
        color: #ffd700;
    }
    .hero-subtitle {
        font-size: 1.5rem;
        color: #dbeafe;
        margin-bottom: 2rem;
    }
    .video-frame {
        position: relative;
        aspect-ratio: 16 / 9;
        margin-bottom: 3rem;
        border: 2px solid #1e40af;
        border-radius: 0.5rem;
        overflow: hidden;
        background: rgba(30, 58, 138, 0.5);
    }
    .video-frame iframe {
        width: 100%;
        height: 100%;
        border: none;
    }
    .trust-row {
        display: flex;
        flex-wrap: wrap;
        justify-content: center;
        gap: 1.5rem;
        margin-top: 2rem;
        font-size: 0.875rem;
        color: #bfdbfe;
    }
    .trust-row i {
        color: #ffd700;
        margin-right: 0.5rem;
    }

    .spots-badge {
        position: absolute;
        top: 1rem;
        right: 1rem;
        z-index: 20;
    }
    .spots-badge-ping {
        position: absolute;
        inset: 0;
        border-radius: 9999px;
        background: rgba(239, 68, 68, 0.3);
        animation: ping 1.5s cubic-bezier(0, 0, 0.2, 1) infinite;
    }
    .spots-badge-pill {
        position: relative;
        display: flex;
        align-items: center;
        gap: 0.25rem;
        background: #dc2626;
        border-radius: 9999px;
        padding: 0.25rem 0.75rem;
        font-size: 0.875rem;
        font-weight: 700;
    }
    .spots-badge-pill i {
        color: #ffd700;
    }

    .learn-section {
        background: linear-gradient(to bottom, #001845, #001233);
    }
    .learn-grid {
        display: grid;
        grid-template-columns: repeat(auto-fit, minmax(16rem, 1fr));
        gap: 1.5rem;
        max-width: 64rem;
        margin: 0 auto;
    }
    .learn-card {
        background: rgba(30, 58, 138, 0.2);
        border: 1px solid #1e40af;
        border-radius: 0.5rem;
        padding: 1.5rem;
        transition: transform 0.3s ease;
    }
    .learn-card:hover {
        transform: scale(1.05);
    }
    .learn-card p {
        color: #bfdbfe;
    }
    .learn-icon {
        display: flex;
        align-items: center;
        justify-content: center;
        width: 4rem;
        height: 4rem;
        border-radius: 9999px;
        background: rgba(30, 58, 138, 0.5);
        color: #ffd700;
        font-size: 2rem;
        margin-bottom: 1rem;
    }

    .testimonials-section {
        background: linear-gradient(to bottom, #001233, #001845);
    }
    .testimonial-container {
        display: grid;
        grid-template-columns: repeat(auto-fit, minmax(14rem, 1fr));
        gap: 1rem;
        max-width: 64rem;
        margin: 0 auto;
    }
    .testimonial img {
        width: 100%;
        border-radius: 0.5rem;
    }
    .content-header {
        margin-top: 4rem;
        padding-top: 2rem;
        border-top: 1px solid rgba(30, 64, 175, 0.5);
    }
    .content-tabs {
        max-width: 56rem;
        margin: 0 auto 3rem;
    }
    .tab-list {
        display: grid;
        grid-template-columns: 1fr 1fr;
        margin-bottom: 2rem;
        background: rgba(30, 58, 138, 0.3);
        border-radius: 0.5rem;
        padding: 0.25rem;
    }
    .tab-trigger {
        background: transparent;
        border: none;
        color: #bfdbfe;
        font-size: 1.125rem;
        padding: 0.75rem;
        border-radius: 0.375rem;
        cursor: pointer;
    }
    .tab-trigger i {
        margin-right: 0.5rem;
    }
    .tab-trigger.active {
        background: #001233;
        color: #fff;
    }
    .tab-panel {
        display: flex;
        flex-direction: column;
        gap: 1rem;
        animation: fade-in 0.3s ease;
    }

    .module-card {
        border: 1px solid #1e40af;
        border-radius: 0.5rem;
        overflow: hidden;
        background: rgba(30, 58, 138, 0.1);
        transition: background 0.3s ease;
    }
    .module-card.expanded {
        background: rgba(30, 58, 138, 0.3);
    }
    .module-header {
        display: flex;
        align-items: center;
        justify-content: space-between;
        padding: 1rem;
        cursor: pointer;
    }
    .module-title-group {
        display: flex;
        align-items: center;
        gap: 0.75rem;
    }
    .module-number {
        display: flex;
        align-items: center;
        justify-content: center;
        width: 2rem;
        height: 2rem;
        border-radius: 9999px;
        background: rgba(30, 58, 138, 0.5);
        color: #ffd700;
    }
    .module-summary {
        font-size: 0.875rem;
        color: #93c5fd;
    }
    .module-icons {
        display: flex;
        align-items: center;
        gap: 0.75rem;
        color: #93c5fd;
    }
    .module-emoji {
        font-size: 1.5rem;
    }
    .module-body {
        padding: 0 1rem 1rem;
        border-top: 1px solid rgba(30, 64, 175, 0.5);
        animation: accordion-down 0.2s ease-out;
    }
    .module-body ul, .path-card ul {
        list-style: none;
        padding: 0;
    }
    .module-body li, .path-card li {
        display: flex;
        align-items: flex-start;
        gap: 0.5rem;
        margin-bottom: 0.5rem;
        font-size: 0.875rem;
        color: #dbeafe;
    }
    .module-body li i {
        color: #ffd700;
        margin-top: 0.2rem;
    }

    .bonus-intro, .bonus-total {
        background: rgba(30, 58, 138, 0.2);
        border: 1px solid #1e40af;
        border-radius: 0.5rem;
        padding: 1.5rem;
    }
    .bonus-intro h3 i {
        color: #ffd700;
        margin-right: 0.5rem;
    }
    .bonus-total {
        text-align: center;
    }
    .progress-row {
        display: flex;
        align-items: center;
        gap: 0.75rem;
        color: #bfdbfe;
    }
    .progress-track {
        flex: 1;
        height: 0.5rem;
        background: rgba(30, 58, 138, 0.5);
        border-radius: 9999px;
        overflow: hidden;
    }
    .progress-fill {
        height: 100%;
        background: #ffd700;
        transition: width 0.5s ease-in-out;
    }
    .bonus-grid {
        display: grid;
        grid-template-columns: repeat(auto-fit, minmax(18rem, 1fr));
        gap: 1.5rem;
    }
    .bonus-card {
        border: 1px solid rgba(30, 64, 175, 0.3);
        border-radius: 0.5rem;
        padding: 1rem;
        transition: all 0.5s ease;
    }
    .bonus-card.locked {
        background: rgba(30, 58, 138, 0.1);
        filter: grayscale(1);
        opacity: 0.5;
    }
    .bonus-card.revealed {
        border-color: rgba(255, 215, 0, 0.5);
        background: rgba(30, 58, 138, 0.3);
        animation: reveal 0.5s ease;
    }
    .bonus-content {
        display: flex;
        align-items: flex-start;
        gap: 0.75rem;
    }
    .bonus-icon {
        border-radius: 9999px;
        padding: 0.5rem;
        background: rgba(30, 58, 138, 0.5);
        color: #60a5fa;
    }
    .bonus-card.revealed .bonus-icon {
        background: rgba(255, 215, 0, 0.2);
        color: #ffd700;
    }
    .bonus-title {
        display: flex;
        align-items: center;
    }
    .bonus-description {
        font-size: 0.875rem;
        color: #bfdbfe;
    }
    .bonus-value {
        color: #ffd700;
        font-weight: 500;
    }
    .bonus-reveal-button {
        width: 100%;
        margin-top: 0.75rem;
        padding: 0.5rem;
        background: transparent;
        color: #93c5fd;
        border: 1px solid #1e40af;
        border-radius: 0.375rem;
        cursor: pointer;
    }
    .bonus-reveal-button:hover {
        background: rgba(30, 58, 138, 0.5);
        color: #fff;
    }
    .bonus-reveal-button i {
        margin-right: 0.5rem;
    }

    .offer-section {
        background: #001845;
    }
    .countdown-panel {
        max-width: 56rem;
        margin: 0 auto 2rem;
        background: rgba(30, 58, 138, 0.3);
        border: 1px solid rgba(30, 64, 175, 0.5);
        border-radius: 0.5rem;
        padding: 0.75rem;
        text-align: center;
    }
    .countdown-panel p {
        color: #bfdbfe;
        font-size: 0.875rem;
        margin-bottom: 0.25rem;
    }
    .countdown {
        display: flex;
        justify-content: center;
        gap: 0.75rem;
    }
    .countdown-unit {
        display: flex;
        flex-direction: column;
        align-items: center;
    }
    .countdown-value {
        display: flex;
        align-items: center;
        justify-content: center;
        width: 3.5rem;
        height: 3.5rem;
        background: #001233;
        border: 1px solid #1e40af;
        border-radius: 0.25rem;
        font-size: 1.25rem;
        font-weight: 700;
        color: #ffd700;
    }
    .countdown-label {
        font-size: 0.75rem;
        color: #93c5fd;
        margin-top: 0.25rem;
    }
    .offer-card, .mid-cta, .final-cta, .guarantee-card {
        max-width: 56rem;
        margin: 0 auto;
        background: rgba(30, 58, 138, 0.3);
        border: 1px solid #1e40af;
        border-radius: 0.75rem;
        padding: 2rem;
        text-align: center;
    }
    .price-note {
        font-size: 0.875rem;
        vertical-align: top;
        margin-left: 0.25rem;
    }
    .installments {
        font-size: 1.25rem;
        color: #bfdbfe;
        margin-bottom: 1.5rem;
    }
    .payment-methods {
        display: flex;
        justify-content: center;
        gap: 0.5rem;
        margin-top: 1rem;
    }
    .payment-method {
        background: rgba(30, 58, 138, 0.5);
        color: #bfdbfe;
        font-size: 0.75rem;
        padding: 0.25rem 0.5rem;
        border-radius: 0.25rem;
    }

    .guarantee-section {
        background: linear-gradient(to bottom, #001233, #001845);
    }
    .guarantee-card {
        display: flex;
        flex-wrap: wrap;
        align-items: center;
        gap: 2rem;
        text-align: left;
    }
    .guarantee-seal {
        position: relative;
        flex: 0 0 auto;
        margin: 0 auto;
    }
    .guarantee-seal img {
        position: relative;
        width: 6rem;
        height: 6rem;
    }
    .seal-ping {
        position: absolute;
        inset: 0;
        border-radius: 9999px;
        background: rgba(255, 215, 0, 0.2);
        animation: ping 1.5s cubic-bezier(0, 0, 0.2, 1) infinite;
    }
    .guarantee-text {
        flex: 1 1 20rem;
        color: #dbeafe;
    }

    .faq-section {
        background: #001845;
    }
    .faq-list {
        max-width: 48rem;
        margin: 0 auto 4rem;
        display: flex;
        flex-direction: column;
        gap: 1rem;
    }
    .faq-item {
        border: 1px solid #1e40af;
        border-radius: 0.5rem;
        background: rgba(30, 58, 138, 0.1);
    }
    .faq-item.open {
        border-color: #1d4ed8;
        background: rgba(30, 58, 138, 0.3);
    }
    .faq-question {
        display: flex;
        justify-content: space-between;
        align-items: center;
        width: 100%;
        padding: 1rem;
        background: transparent;
        border: none;
        color: #fff;
        font-size: 1rem;
        font-weight: 700;
        text-align: left;
        cursor: pointer;
    }
    .toggle-icon {
        color: #93c5fd;
        font-size: 1.25rem;
    }
    .faq-answer {
        padding: 0 1rem 1rem;
        border-top: 1px solid rgba(30, 64, 175, 0.5);
        color: #bfdbfe;
        animation: accordion-down 0.2s ease-out;
    }
    .mid-cta {
        margin-bottom: 3rem;
    }
    .mid-cta-spots {
        margin-top: 1rem;
        color: #93c5fd;
        font-size: 0.875rem;
    }
    .mid-cta-spots i {
        color: #ffd700;
        margin-right: 0.25rem;
    }
    .final-lead {
        font-size: 1.25rem;
        color: #dbeafe;
    }
    .paths {
        display: grid;
        grid-template-columns: repeat(auto-fit, minmax(18rem, 1fr));
        gap: 1.5rem;
        margin: 1.5rem 0 2rem;
        text-align: left;
    }
    .path-card {
        background: rgba(30, 58, 138, 0.2);
        border: 1px solid #1e40af;
        border-radius: 0.5rem;
        padding: 1.5rem;
    }
    .path-yes-card {
        border-color: #1d4ed8;
    }
    .path-no {
        color: #f87171;
        margin-right: 0.5rem;
    }
    .path-yes {
        color: #4ade80;
        margin-right: 0.5rem;
    }
    .quote {
        font-size: 1.25rem;
        color: #ffd700;
        margin-bottom: 2rem;
    }
    .final-trust {
        display: flex;
        justify-content: center;
        gap: 0.5rem;
        margin-top: 1rem;
        font-size: 0.875rem;
        color: #93c5fd;
    }
    .final-trust i {
        color: #ffd700;
    }

    .purchase-notification {
        position: fixed;
        bottom: 6rem;
        left: 1rem;
        z-index: 50;
        display: flex;
        align-items: flex-start;
        gap: 0.75rem;
        max-width: 20rem;
        background: rgba(30, 58, 138, 0.9);
        border: 1px solid #1e40af;
        border-radius: 0.5rem;
        padding: 0.75rem;
        box-shadow: 0 10px 15px rgba(0, 0, 0, 0.3);
        animation: slide-in-left 0.4s ease-out;
    }
    .purchase-notification-icon {
        background: #1e40af;
        border-radius: 9999px;
        padding: 0.5rem;
        color: #ffd700;
    }
    .purchase-notification-text {
        flex: 1;
        font-size: 0.875rem;
    }
    .purchase-notification-time {
        color: #93c5fd;
        font-size: 0.75rem;
    }
    .purchase-notification-close, .toast-close {
        background: transparent;
        border: none;
        color: #60a5fa;
        cursor: pointer;
    }
    .floating-cta {
        position: fixed;
        bottom: 0;
        left: 0;
        right: 0;
        z-index: 40;
        display: flex;
        align-items: center;
        justify-content: space-between;
        gap: 1rem;
        padding: 0.75rem 1rem;
        background: rgba(0, 18, 51, 0.95);
        border-top: 1px solid #1e40af;
        animation: slide-up 0.3s ease-out;
    }
    .floating-cta-text {
        display: flex;
        flex-direction: column;
    }
    .floating-cta-price {
        color: #ffd700;
        font-weight: 700;
    }
    .floating-cta-spots {
        color: #93c5fd;
        font-size: 0.75rem;
    }
    .toast-viewport {
        position: fixed;
        top: 1rem;
        right: 1rem;
        z-index: 100;
        display: flex;
        flex-direction: column;
        gap: 0.5rem;
        max-width: 24rem;
    }
    .toast {
        display: flex;
        align-items: flex-start;
        gap: 0.75rem;
        background: #001845;
        border: 1px solid #1e40af;
        border-radius: 0.5rem;
        padding: 1rem;
        animation: slide-in-left 0.3s ease-out;
    }
    .toast-title {
        font-weight: 700;
    }
    .toast-description {
        color: #bfdbfe;
        font-size: 0.875rem;
    }

    .footer {
        padding: 2rem 1rem;
        background: #000c1f;
        color: #60a5fa;
        border-top: 1px solid rgba(30, 58, 138, 0.5);
        text-align: center;
    }
    .footer-brand {
        display: flex;
        justify-content: center;
        align-items: center;
        gap: 0.5rem;
        font-size: 1.25rem;
        font-weight: 700;
        color: #fff;
    }
    .footer-brand i {
        color: #ffd700;
    }
    .footer-links {
        display: flex;
        justify-content: center;
        gap: 1.5rem;
        margin-top: 1rem;
    }
    .footer-links a {
        color: #60a5fa;
        text-decoration: none;
    }
    .footer-links a:hover {
        color: #fff;
    }
    .footer-copy {
        margin-top: 2rem;
        font-size: 0.875rem;
    }

    @keyframes ping {
        75%, 100% { transform: scale(1.5); opacity: 0; }
    }
    @keyframes fade-in {
        from { opacity: 0; }
        to { opacity: 1; }
    }
    @keyframes accordion-down {
        from { opacity: 0; transform: translateY(-4px); }
        to { opacity: 1; transform: translateY(0); }
    }
    @keyframes reveal {
        from { transform: scale(0.95); opacity: 0.5; }
        to { transform: scale(1); opacity: 1; }
    }
    @keyframes slide-in-left {
        from { transform: translateX(-100%); opacity: 0; }
        to { transform: translateX(0); opacity: 1; }
    }
    @keyframes slide-up {
        from { transform: translateY(100%); }
        to { transform: translateY(0); }
    }

    @media (max-width: 768px) {
        .hero-title {
            font-size: 2.25rem;
        }
        .hero-subtitle {
            font-size: 1.25rem;
        }
        .section-header h2 {
            font-size: 1.875rem;
        }
        .module-summary {
            display: none;
        }
        .spots-badge {
            position: relative;
            top: 0;
            right: 0;
            display: flex;
            justify-content: center;
            margin-bottom: 1rem;
        }
    }
"#;
